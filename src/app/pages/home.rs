//! Landing page.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

/// Who the system is for, one card each.
const AUDIENCES: [(&str, &str, &str); 3] = [
    (
        "☺",
        "For Guests",
        "Browse and book stays, manage your bookings, and request services.",
    ),
    (
        "⚒",
        "For Receptionists",
        "Handle check-ins, manage requests, and keep rooms up to date.",
    ),
    (
        "▤",
        "For Admins",
        "Oversee rooms, users, bookings, service requests, and payments.",
    ),
];

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),
            full_bleed: true,

            section { class: "relative min-h-[80vh] w-full overflow-hidden bg-gradient-to-t from-slate-950 via-slate-900 to-slate-800",
                div { class: "relative z-10 max-w-7xl mx-auto px-6 pt-36 pb-24",
                    h1 { class: "text-4xl sm:text-6xl font-bold tracking-tight", "Modern Hotel Management" }
                    p { class: "mt-4 text-slate-300 max-w-2xl",
                        "Book rooms, manage stays, and handle requests seamlessly for Guests, Receptionists, and Admins."
                    }
                    div { class: "mt-8 flex gap-3",
                        Link { to: Route::Rooms {}, class: "px-5 py-2.5 rounded-lg bg-orange-500 hover:bg-orange-600", "Explore Rooms" }
                        Link { to: Route::Register {}, class: "px-5 py-2.5 rounded-lg bg-white/10 hover:bg-white/20", "Create Account" }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-6 py-16 grid grid-cols-1 md:grid-cols-3 gap-6",
                for (icon, heading, blurb) in AUDIENCES {
                    div { key: "{heading}", class: "p-6 rounded-2xl bg-white/5 border border-white/10",
                        span { class: "text-2xl text-orange-400", "{icon}" }
                        div { class: "mt-2 font-semibold", "{heading}" }
                        p { class: "text-slate-400 text-sm", "{blurb}" }
                    }
                }
            }
        }
    }
}
