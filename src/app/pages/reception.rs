//! Front desk dashboard.

use dioxus::prelude::*;
use hms_model::Capability;

use crate::api::{self, ApiClient};
use crate::app::components::{Layout, RoleGate};
use crate::app::session::use_session;

/// Front desk actions. Displayed only; nothing backs them yet.
const QUICK_ACTIONS: [&str; 4] = ["Check-in", "Check-out", "Update Room", "Resolve Request"];

/// Reception page component.
#[component]
pub fn Reception() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();

    // Every guest's bookings, unfiltered
    let bookings = use_resource(move || {
        let api = api.clone();
        let allowed = session.allows(Capability::ViewReception);
        async move {
            if !allowed {
                return None;
            }
            api::list_bookings(&api).await.ok()
        }
    });

    let list = bookings.read().clone().flatten().unwrap_or_default();

    rsx! {
        Layout {
            title: "Reception".to_string(),
            nav_active: "reception".to_string(),

            h2 { class: "text-2xl font-semibold mb-6", "Reception Dashboard" }
            RoleGate { capability: Capability::ViewReception,
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    div { class: "bg-white/5 border border-white/10 rounded-xl p-4",
                        div { class: "font-semibold mb-3", "Bookings" }
                        div { class: "space-y-2",
                            for b in list {
                                div { key: "{b.id}", class: "p-3 rounded-lg bg-white/5 flex items-center justify-between",
                                    div {
                                        div { class: "text-sm", "Guest {b.guest_id}" }
                                        div { class: "text-xs text-slate-400", "Room {b.room_id}" }
                                    }
                                    div { class: "text-xs text-slate-400", "{b.status}" }
                                }
                            }
                        }
                    }
                    div { class: "bg-white/5 border border-white/10 rounded-xl p-4",
                        div { class: "font-semibold mb-3", "Quick Actions" }
                        div { class: "grid grid-cols-2 gap-3",
                            for action in QUICK_ACTIONS {
                                button { key: "{action}", class: "bg-white/10 rounded-lg py-2", r#type: "button", "{action}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
