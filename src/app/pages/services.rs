//! Guest service requests: submit form and history.

use dioxus::prelude::*;
use hms_model::{prepend, Identity, ServiceRequest, ServiceType};

use crate::api::{self, ApiClient};
use crate::app::components::Layout;
use crate::app::session::{use_session, Session};

/// Post a request for `me`, returning the server's record or an inline
/// message.
pub(crate) async fn submit_request(
    api: &ApiClient,
    me: Option<&Identity>,
    kind: ServiceType,
    description: &str,
) -> Result<ServiceRequest, String> {
    let Some(me) = me else {
        return Err("Sign in to submit a request".to_string());
    };
    api::create_service_request(api, &me.id, kind, description)
        .await
        .map_err(|e| e.user_message("Could not submit request"))
}

/// The signed-in guest's requests plus the latest inline error.
#[derive(Clone, Copy)]
pub(crate) struct ServiceLog {
    session: Session,
    pub list: Signal<Vec<ServiceRequest>>,
    pub error: Signal<Option<String>>,
}

/// Load the guest's requests whenever the session identity changes.
pub(crate) fn use_service_log(api: ApiClient, session: Session) -> ServiceLog {
    let mut list = use_signal(Vec::<ServiceRequest>::new);
    let error = use_signal(|| None::<String>);

    let requests = use_resource(move || {
        let api = api.clone();
        let me = session.identity();
        async move {
            let Some(me) = me else {
                return None;
            };
            api::list_user_services(&api, &me.id).await.ok()
        }
    });

    // Seed the local list whenever a fetch completes
    use_effect(move || {
        if let Some(Some(loaded)) = requests.read().as_ref() {
            list.set(loaded.clone());
        }
    });

    ServiceLog {
        session,
        list,
        error,
    }
}

impl ServiceLog {
    /// Submit for the signed-in guest and put the server's record on top.
    /// The list is not re-fetched. Returns whether the server accepted it.
    pub(crate) async fn submit(
        mut self,
        api: ApiClient,
        kind: ServiceType,
        description: String,
    ) -> bool {
        self.error.set(None);
        let me = self.session.identity();
        match submit_request(&api, me.as_ref(), kind, &description).await {
            Ok(created) => {
                self.list.with_mut(|l| prepend(l, created));
                true
            }
            Err(msg) => {
                self.error.set(Some(msg));
                false
            }
        }
    }
}

/// Services page component.
#[component]
pub fn Services() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();

    let log = use_service_log(api.clone(), session);
    let ServiceLog { list, error, .. } = log;
    let mut kind = use_signal(ServiceType::default);
    let mut description = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        let kind = kind();
        let text = description();
        spawn(async move {
            if log.submit(api, kind, text).await {
                description.set(String::new());
            }
        });
    };

    rsx! {
        Layout {
            title: "Service Requests".to_string(),
            nav_active: "services".to_string(),

            h2 { class: "text-2xl font-semibold mb-6", "Service Requests" }
            form {
                class: "bg-white/5 border border-white/10 rounded-xl p-4 mb-6",
                onsubmit: on_submit,

                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-3",
                    select {
                        class: "form-field",
                        value: "{kind}",
                        onchange: move |e| {
                            if let Some(k) = ServiceType::parse(&e.value()) {
                                kind.set(k);
                            }
                        },
                        for k in ServiceType::ALL {
                            option { key: "{k}", value: "{k}", selected: k == kind(), "{k}" }
                        }
                    }
                    input {
                        class: "form-field sm:col-span-2",
                        placeholder: "Describe your request",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                if let Some(msg) = error() {
                    p { class: "form-error", "{msg}" }
                }
                button {
                    class: "mt-3 bg-orange-500 hover:bg-orange-600 rounded-lg px-4 py-2",
                    r#type: "submit",
                    "Submit"
                }
            }

            div { class: "space-y-3",
                for s in list() {
                    div { key: "{s.id}", class: "bg-white/5 border border-white/10 rounded-xl p-4 flex items-center justify-between",
                        div {
                            div { class: "font-semibold", "{s.kind}" }
                            div { class: "text-slate-400 text-sm", "{s.description}" }
                        }
                        div { class: "text-xs text-slate-400", "{s.status}" }
                    }
                }
            }
        }
    }
}
