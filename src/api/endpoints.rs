//! Typed calls for each REST endpoint the client uses.

use hms_model::{
    Booking, Id, Identity, LoginRequest, LoginResponse, NewRoom, NewServiceRequest, Registration,
    Room, ServiceRequest, ServiceType,
};
use tracing::info;

use super::{ApiClient, ApiError};

fn segment(id: &Id) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

// =============================================================================
// Auth
// =============================================================================

/// GET /api/auth/me
pub async fn current_identity(api: &ApiClient) -> Result<Identity, ApiError> {
    api.get("/api/auth/me").await
}

/// POST /api/auth/login, storing the returned access token.
///
/// On failure the stored credential is left exactly as it was.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<(), ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = api.post("/api/auth/login", &request).await?;
    api.credentials().set(&response.access_token);
    info!("Signed in");
    Ok(())
}

/// POST /api/auth/register, then log in with the same credentials.
///
/// Two independent calls. If the login fails the account still exists
/// server-side but nothing is stored client-side.
pub async fn register(api: &ApiClient, registration: &Registration) -> Result<(), ApiError> {
    api.post_ignore("/api/auth/register", registration).await?;
    info!("Registered new {} account", registration.role);
    let creds = registration.login_request();
    login(api, &creds.email, &creds.password).await
}

/// Drop the stored credential. No network call.
pub fn logout(api: &ApiClient) {
    api.credentials().clear();
    info!("Signed out");
}

// =============================================================================
// Rooms
// =============================================================================

/// GET /api/rooms
pub async fn list_rooms(api: &ApiClient) -> Result<Vec<Room>, ApiError> {
    api.get("/api/rooms").await
}

/// POST /api/rooms, returning the room as the server stored it.
pub async fn create_room(api: &ApiClient, room: &NewRoom) -> Result<Room, ApiError> {
    api.post("/api/rooms", room).await
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(api: &ApiClient, id: &Id) -> Result<(), ApiError> {
    api.delete(&format!("/api/rooms/{}", segment(id))).await
}

// =============================================================================
// Bookings
// =============================================================================

/// GET /api/bookings (every guest)
pub async fn list_bookings(api: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    api.get("/api/bookings").await
}

/// GET /api/bookings/user/{id}
pub async fn list_user_bookings(api: &ApiClient, user_id: &Id) -> Result<Vec<Booking>, ApiError> {
    api.get(&format!("/api/bookings/user/{}", segment(user_id)))
        .await
}

// =============================================================================
// Service requests
// =============================================================================

/// GET /api/services/user/{id}
pub async fn list_user_services(
    api: &ApiClient,
    user_id: &Id,
) -> Result<Vec<ServiceRequest>, ApiError> {
    api.get(&format!("/api/services/user/{}", segment(user_id)))
        .await
}

/// POST /api/services
pub async fn create_service_request(
    api: &ApiClient,
    guest_id: &Id,
    kind: ServiceType,
    description: &str,
) -> Result<ServiceRequest, ApiError> {
    let request = NewServiceRequest {
        guest_id: guest_id.clone(),
        kind,
        description: description.to_string(),
    };
    api.post("/api/services", &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client;
    use crate::api::CredentialStore;
    use hms_model::Role;
    use serde_json::json;

    fn registration() -> Registration {
        Registration {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            password: "secret".to_string(),
            role: Role::Guest,
        }
    }

    #[test]
    fn test_login_stores_access_token() {
        let (api, transport, credentials) = client(None);
        transport.respond(200, json!({"access_token": "jwt-1", "token_type": "bearer"}));

        tokio_test::block_on(login(&api, "ada@example.com", "secret")).unwrap();

        assert_eq!(credentials.get(), Some("jwt-1".to_string()));
        let req = &transport.requests()[0];
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"email": "ada@example.com", "password": "secret"}));
    }

    #[test]
    fn test_failed_login_leaves_credential_unchanged() {
        let (api, transport, credentials) = client(Some("old-token"));
        transport.respond(401, json!({"detail": "Invalid credentials"}));

        let err = tokio_test::block_on(login(&api, "ada@example.com", "wrong")).unwrap_err();

        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert_eq!(credentials.get(), Some("old-token".to_string()));
    }

    #[test]
    fn test_register_then_login() {
        let (api, transport, credentials) = client(None);
        transport
            .respond(201, json!({"id": "u1"}))
            .respond(200, json!({"access_token": "jwt-new"}));

        tokio_test::block_on(register(&api, &registration())).unwrap();

        assert_eq!(
            transport.calls(),
            vec!["POST /api/auth/register", "POST /api/auth/login"]
        );
        assert_eq!(credentials.get(), Some("jwt-new".to_string()));

        let reg_body: serde_json::Value =
            serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(reg_body["role"], "Guest");
        assert_eq!(reg_body["phone"], "555-0100");
    }

    #[test]
    fn test_register_ok_but_login_fails_stores_nothing() {
        let (api, transport, credentials) = client(None);
        transport
            .respond(201, json!({"id": "u1"}))
            .respond(500, json!({"detail": "Token service unavailable"}));

        let err = tokio_test::block_on(register(&api, &registration())).unwrap_err();

        assert_eq!(transport.requests().len(), 2);
        assert_eq!(err.user_message("Registration failed"), "Token service unavailable");
        assert_eq!(credentials.get(), None);
    }

    #[test]
    fn test_register_failure_skips_login() {
        let (api, transport, credentials) = client(None);
        transport.respond(400, json!({"detail": "Email already registered"}));

        let err = tokio_test::block_on(register(&api, &registration())).unwrap_err();

        assert_eq!(transport.calls(), vec!["POST /api/auth/register"]);
        assert_eq!(err.detail(), Some("Email already registered"));
        assert_eq!(credentials.get(), None);
    }

    #[test]
    fn test_logout_clears_without_network() {
        let (api, transport, credentials) = client(Some("tok"));
        logout(&api);
        assert_eq!(credentials.get(), None);
        assert!(transport.requests().is_empty());

        // Also fine when already signed out
        logout(&api);
        assert_eq!(credentials.get(), None);
    }

    #[test]
    fn test_user_scoped_paths() {
        let (api, transport, _) = client(Some("tok"));
        transport.respond(200, json!([])).respond(200, json!([]));

        let id = Id::from("u/1");
        tokio_test::block_on(list_user_bookings(&api, &id)).unwrap();
        tokio_test::block_on(list_user_services(&api, &Id::from(7))).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://api.test/api/bookings/user/u%2F1");
        assert_eq!(requests[1].url, "http://api.test/api/services/user/7");
    }

    #[test]
    fn test_delete_room_is_one_call() {
        let (api, transport, _) = client(Some("tok"));
        transport.respond_empty(204);

        tokio_test::block_on(delete_room(&api, &Id::from(12))).unwrap();
        assert_eq!(transport.calls(), vec!["DELETE /api/rooms/12"]);
    }

    #[test]
    fn test_create_service_request_payload() {
        let (api, transport, _) = client(Some("tok"));
        transport.respond(
            201,
            json!({"id": 5, "guestId": "u1", "type": "Food", "description": "Tea", "status": "Pending"}),
        );

        let created = tokio_test::block_on(create_service_request(
            &api,
            &Id::from("u1"),
            ServiceType::Food,
            "Tea",
        ))
        .unwrap();

        assert_eq!(created.id, Id::from(5));
        let body: serde_json::Value =
            serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"guestId": "u1", "type": "Food", "description": "Tea"}));
    }
}
