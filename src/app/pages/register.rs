//! Account creation form.

use dioxus::prelude::*;
use dioxus::router::RouterContext;
use hms_model::{Registration, Role};

use crate::api::{self, ApiClient};
use crate::app::components::Layout;
use crate::app::session::{use_session, Session};
use crate::app::Route;

/// Create the account, sign in with it and land on the home page.
///
/// Registration and the follow-up login are two separate calls. If the
/// second one fails the account exists but the user stays here, signed out.
pub(crate) async fn create_account(
    api: &ApiClient,
    session: Session,
    router: RouterContext,
    registration: &Registration,
) -> Result<(), String> {
    api::register(api, registration)
        .await
        .map_err(|e| e.user_message("Registration failed"))?;
    session.refresh();
    router.push(Route::Home {});
    Ok(())
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let router = router();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let registration = Registration {
            name: name(),
            email: email(),
            phone: phone(),
            password: password(),
            role: role(),
        };
        let api = api.clone();
        spawn(async move {
            if let Err(msg) = create_account(&api, session, router, &registration).await {
                error.set(Some(msg));
            }
        });
    };

    rsx! {
        Layout {
            title: "Register".to_string(),
            nav_active: "register".to_string(),

            div { class: "flex items-center justify-center pt-12",
                form {
                    class: "w-full max-w-xl bg-white/5 p-6 rounded-2xl border border-white/10",
                    onsubmit: on_submit,

                    h2 { class: "text-2xl font-semibold", "Create your account" }
                    if let Some(msg) = error() {
                        p { class: "form-error", "{msg}" }
                    }

                    div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4 mt-6",
                        input {
                            class: "form-field",
                            placeholder: "Name",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                        input {
                            class: "form-field",
                            placeholder: "Phone",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                        input {
                            class: "form-field sm:col-span-2",
                            placeholder: "Email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        input {
                            class: "form-field sm:col-span-2",
                            placeholder: "Password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        select {
                            class: "form-field sm:col-span-2",
                            value: "{role}",
                            onchange: move |e| {
                                if let Some(r) = Role::parse(&e.value()) {
                                    role.set(r);
                                }
                            },
                            for r in Role::ALL {
                                option { key: "{r}", value: "{r}", selected: r == role(), "{r}" }
                            }
                        }
                        button {
                            class: "sm:col-span-2 bg-orange-500 hover:bg-orange-600 rounded-lg py-2.5",
                            r#type: "submit",
                            "Create account"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client;
    use crate::api::CredentialStore;
    use crate::app::testing::Mounted;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn registration() -> Registration {
        Registration {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            password: "pw".to_string(),
            role: Role::Guest,
        }
    }

    #[tokio::test]
    async fn test_register_signs_in_and_goes_home() {
        let (api, transport, credentials) = client(None);
        let mut app = Mounted::app(api.clone(), Route::Register {});
        app.settle(20).await;

        transport
            .respond_empty(201)
            .respond(200, json!({"access_token": "t1"}))
            .respond(200, json!({"id": "u1", "name": "Ada", "role": "Guest"}));
        let (session, router) = (app.value(), app.router());
        app.spawn(async move {
            let _ = create_account(&api, session, router, &registration()).await;
        });
        app.settle(50).await;

        assert_eq!(credentials.get(), Some("t1".to_string()));
        assert_eq!(app.path(), "/");
        assert_eq!(app.in_app(|| session.identity()).map(|me| me.name), Some("Ada".to_string()));
    }

    #[tokio::test]
    async fn test_rejected_registration_stays_on_form() {
        let (api, transport, credentials) = client(None);
        let mut app = Mounted::app(api.clone(), Route::Register {});
        app.settle(20).await;

        transport.respond(400, json!({"detail": "Email already registered"}));
        let outcome = Rc::new(RefCell::new(None));
        let (session, router, slot) = (app.value(), app.router(), outcome.clone());
        app.spawn(async move {
            let result = create_account(&api, session, router, &registration()).await;
            slot.borrow_mut().replace(result);
        });
        app.settle(30).await;

        assert_eq!(
            outcome.borrow().clone(),
            Some(Err("Email already registered".to_string()))
        );
        assert_eq!(credentials.get(), None);
        assert_eq!(app.path(), "/register");
        assert_eq!(transport.calls(), vec!["POST /api/auth/register"]);
    }
}
