//! Public room listing.

use dioxus::prelude::*;

use crate::api::{self, ApiClient};
use crate::app::components::Layout;
use crate::app::format::nightly_rate;

/// Rooms page component.
#[component]
pub fn Rooms() -> Element {
    let api = use_context::<ApiClient>();

    // Fetch failures leave the grid empty
    let rooms = use_resource(move || {
        let api = api.clone();
        async move { api::list_rooms(&api).await.ok() }
    });

    let rooms_list = rooms.read().clone().flatten().unwrap_or_default();

    rsx! {
        Layout {
            title: "Rooms".to_string(),
            nav_active: "rooms".to_string(),

            h2 { class: "text-2xl font-semibold mb-6", "Available Rooms" }
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for room in rooms_list {
                    div { key: "{room.id}", class: "bg-white/5 border border-white/10 rounded-xl p-4",
                        div { class: "aspect-video rounded-lg bg-white/5 flex items-center justify-center mb-3 text-4xl text-orange-400",
                            "🛏"
                        }
                        div { class: "font-semibold", "Room {room.room_number} • {room.kind}" }
                        div { class: "text-slate-400 text-sm", {nightly_rate(room.price)} }
                    }
                }
            }
        }
    }
}
