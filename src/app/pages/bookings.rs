//! The signed-in guest's booking history.

use dioxus::prelude::*;

use crate::api::{self, ApiClient};
use crate::app::components::Layout;
use crate::app::format::{money, stay_range};
use crate::app::session::use_session;

/// Bookings page component.
#[component]
pub fn Bookings() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();

    // Re-runs once the session resolves; anonymous stays empty
    let bookings = use_resource(move || {
        let api = api.clone();
        let me = session.identity();
        async move {
            let Some(me) = me else {
                return None;
            };
            api::list_user_bookings(&api, &me.id).await.ok()
        }
    });

    let list = bookings.read().clone().flatten().unwrap_or_default();

    rsx! {
        Layout {
            title: "My Bookings".to_string(),
            nav_active: "bookings".to_string(),

            h2 { class: "text-2xl font-semibold mb-6", "My Bookings" }
            div { class: "space-y-3",
                for b in list {
                    div { key: "{b.id}", class: "bg-white/5 border border-white/10 rounded-xl p-4 flex items-center justify-between",
                        div {
                            div { class: "font-semibold", "Room {b.room_id}" }
                            div { class: "text-slate-400 text-sm", {stay_range(&b.check_in, &b.check_out)} }
                        }
                        div { class: "text-right",
                            div { class: "font-semibold", {money(b.total_amount)} }
                            div { class: "text-xs text-slate-400", "{b.status}" }
                        }
                    }
                }
            }
        }
    }
}
