//! Sign-in form.

use dioxus::prelude::*;
use dioxus::router::RouterContext;

use crate::api::{self, ApiClient};
use crate::app::components::Layout;
use crate::app::session::{use_session, Session};
use crate::app::Route;

/// Sign in, re-resolve the session and land on the home page.
///
/// On failure nothing moves and the returned message is shown inline.
pub(crate) async fn sign_in(
    api: &ApiClient,
    session: Session,
    router: RouterContext,
    email: &str,
    password: &str,
) -> Result<(), String> {
    api::login(api, email, password)
        .await
        .map_err(|e| e.user_message("Login failed"))?;
    session.refresh();
    router.push(Route::Home {});
    Ok(())
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let router = router();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let api = api.clone();
        spawn(async move {
            // Fields keep their values so the user can correct them
            if let Err(msg) = sign_in(&api, session, router, &email(), &password()).await {
                error.set(Some(msg));
            }
        });
    };

    rsx! {
        Layout {
            title: "Login".to_string(),
            nav_active: "login".to_string(),

            div { class: "flex items-center justify-center pt-12",
                form {
                    class: "w-full max-w-md bg-white/5 p-6 rounded-2xl border border-white/10",
                    onsubmit: on_submit,

                    h2 { class: "text-2xl font-semibold", "Welcome back" }
                    p { class: "text-slate-400 text-sm", "Sign in to continue" }
                    if let Some(msg) = error() {
                        p { class: "form-error", "{msg}" }
                    }

                    div { class: "mt-6 space-y-4",
                        input {
                            class: "form-field",
                            placeholder: "Email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        input {
                            class: "form-field",
                            placeholder: "Password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        button {
                            class: "w-full bg-orange-500 hover:bg-orange-600 rounded-lg py-2.5",
                            r#type: "submit",
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
