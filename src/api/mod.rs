//! HTTP client for the hotel management REST API.
//!
//! [`ApiClient`] centralizes the base address, attaches the stored bearer
//! credential and turns non-2xx answers into [`ApiError`]s carrying the
//! server's detail. The typed calls for each endpoint live in
//! [`endpoints`].

pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod transport;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

pub use credentials::{CredentialStore, MemoryCredentials, TOKEN_KEY};
pub use endpoints::*;
pub use error::ApiError;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

/// API address used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[cfg(not(target_arch = "wasm32"))]
static CONFIGURED_API_URL: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Set the API address for server-side rendering (from configuration).
///
/// Only the first call wins.
#[cfg(not(target_arch = "wasm32"))]
pub fn configure_api_url(url: &str) {
    if CONFIGURED_API_URL.set(url.to_string()).is_err() {
        warn!("API URL already configured, ignoring {}", url);
    }
}

/// API address for this build.
///
/// The browser bundle bakes `HMS_API_URL` in at compile time; the server
/// uses whatever [`configure_api_url`] was given.
pub fn api_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        option_env!("HMS_API_URL")
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        CONFIGURED_API_URL
            .get()
            .cloned()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

/// Shared HTTP client adapter. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    transport: Rc<dyn Transport>,
    credentials: Rc<dyn CredentialStore>,
}

impl ApiClient {
    pub fn new(
        base: &str,
        transport: Rc<dyn Transport>,
        credentials: Rc<dyn CredentialStore>,
    ) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            transport,
            credentials,
        }
    }

    /// Client wired for the current build target: `fetch` + localStorage in
    /// the browser, reqwest + an empty in-memory store on the server.
    pub fn for_platform() -> Self {
        Self::new(
            &api_url(),
            transport::default_transport(),
            credentials::default_credentials(),
        )
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }

    /// Whether a bearer credential is currently stored.
    pub fn has_credential(&self) -> bool {
        self.credentials.get().is_some()
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.base, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", joined, e)))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let url = self.url(path)?;

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.credentials.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        debug!("{} {}", method, path);
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
        };

        let response = match self.transport.send(request).await {
            Ok(r) => r,
            Err(e) => {
                warn!("{} {} failed: {}", method, path, e);
                return Err(e);
            }
        };

        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::from_response(response.status, &response.body);
            warn!("{} {} rejected: {}", method, path, err);
            Err(err)
        }
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// GET and parse the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        Self::decode(&response)
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(Method::Post, path, Some(Self::encode(body)?))
            .await?;
        Self::decode(&response)
    }

    /// POST a JSON body, only caring that it succeeded.
    pub async fn post_ignore<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(Method::Post, path, Some(Self::encode(body)?))
            .await
            .map(|_| ())
    }

    /// DELETE, only caring that it succeeded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::client;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bearer_header_attached_when_token_stored() {
        let (api, transport, _) = client(Some("tok-1"));
        transport.respond(200, json!([]));

        let rooms: Vec<serde_json::Value> = tokio_test::block_on(api.get("/api/rooms")).unwrap();
        assert!(rooms.is_empty());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/api/rooms");
        assert_eq!(requests[0].header("authorization"), Some("Bearer tok-1"));
        assert_eq!(requests[0].body, None);
    }

    #[test]
    fn test_no_bearer_header_without_token() {
        let (api, transport, _) = client(None);
        transport.respond(200, json!({}));

        let _: serde_json::Value = tokio_test::block_on(api.get("api/rooms")).unwrap();
        assert_eq!(transport.requests()[0].header("Authorization"), None);
        assert_eq!(transport.calls(), vec!["GET /api/rooms"]);
    }

    #[test]
    fn test_post_sends_json_body() {
        let (api, transport, _) = client(None);
        transport.respond(201, json!({"ok": true}));

        let resp: serde_json::Value =
            tokio_test::block_on(api.post("/api/things", &json!({"a": 1}))).unwrap();
        assert_eq!(resp["ok"], true);

        let req = &transport.requests()[0];
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_non_success_surfaces_server_detail() {
        let (api, transport, _) = client(None);
        transport.respond(403, json!({"detail": "Not enough permissions"}));

        let err = tokio_test::block_on(api.delete("/api/rooms/1")).unwrap_err();
        assert_eq!(err.detail(), Some("Not enough permissions"));
        assert_eq!(transport.requests().len(), 1, "no retry");
    }

    #[test]
    fn test_transport_failure_is_single_attempt() {
        let (api, transport, _) = client(None);
        transport.fail("connection refused");

        let err = tokio_test::block_on(api.get::<serde_json::Value>("/api/rooms")).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_empty_body_is_fine_for_delete_but_not_for_get() {
        let (api, transport, _) = client(None);
        transport.respond_empty(204).respond_empty(200);

        tokio_test::block_on(api.delete("/api/rooms/7")).unwrap();
        let err = tokio_test::block_on(api.get::<Vec<serde_json::Value>>("/api/rooms")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_base_with_path_prefix_is_kept() {
        let transport = Rc::new(transport::mock::MockTransport::new());
        let api = ApiClient::new(
            "https://hotel.example/backend/",
            transport.clone(),
            Rc::new(MemoryCredentials::new()),
        );
        transport.respond(200, json!([]));

        let _: Vec<serde_json::Value> = tokio_test::block_on(api.get("/api/rooms")).unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "https://hotel.example/backend/api/rooms"
        );
    }

    #[test]
    fn test_invalid_base_is_reported() {
        let (_, transport, credentials) = client(None);
        let api = ApiClient::new("not a url", transport.clone(), credentials);

        let err = tokio_test::block_on(api.get::<serde_json::Value>("/api/rooms")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
        assert!(transport.requests().is_empty());
    }
}
