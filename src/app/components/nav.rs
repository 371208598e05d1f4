//! Navigation bar using Tailwind CSS.

use dioxus::prelude::*;
use dioxus::router::RouterContext;
use hms_model::{Capability, Identity};

use crate::api::ApiClient;
use crate::app::session::{use_session, Session};
use crate::app::Route;

/// One top-level navigation entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    /// Page ID, matched against `NavProps::active`
    pub id: &'static str,
    pub label: &'static str,
    pub route: Route,
}

/// Links visible for the given identity.
///
/// Rooms is public, the guest pages need any identity, and each dashboard
/// appears only for the role that owns it.
pub fn nav_links(identity: Option<&Identity>) -> Vec<NavLink> {
    let mut links = vec![NavLink {
        id: "rooms",
        label: "Rooms",
        route: Route::Rooms {},
    }];

    let Some(me) = identity else {
        return links;
    };

    links.push(NavLink {
        id: "bookings",
        label: "My Bookings",
        route: Route::Bookings {},
    });
    links.push(NavLink {
        id: "services",
        label: "My Requests",
        route: Route::Services {},
    });
    if me.allows(Capability::ViewReception) {
        links.push(NavLink {
            id: "reception",
            label: "Reception",
            route: Route::Reception {},
        });
    }
    if me.allows(Capability::ManageRooms) {
        links.push(NavLink {
            id: "admin",
            label: "Admin",
            route: Route::Admin {},
        });
    }
    links
}

/// Forget the credential and identity, then go to the login page.
///
/// Works the same whether or not anyone was signed in.
pub(crate) fn log_out(api: &ApiClient, session: Session, router: RouterContext) {
    session.sign_out(api);
    router.push(Route::Login {});
}

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "rooms", "admin")
    pub active: String,
}

/// Top bar: brand, role-aware links, and the sign-in / sign-out control.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let router = router();
    let mut menu_open = use_signal(|| false);

    let me = session.identity();
    let links = nav_links(me.as_ref());

    let nav_link_class = |page: &str| {
        if props.active == page {
            "block px-3 py-2 rounded-md text-sm font-medium text-white bg-white/10"
        } else {
            "block px-3 py-2 rounded-md text-sm font-medium text-slate-200 hover:text-white"
        }
    };

    let mobile_menu_class = if menu_open() {
        "block md:hidden"
    } else {
        "hidden md:hidden"
    };

    let logout = move |_: MouseEvent| {
        menu_open.set(false);
        log_out(&api, session, router);
    };

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-30 backdrop-blur bg-slate-900/60 border-b border-white/10",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                // Brand
                Link { to: Route::Home {}, class: "flex items-center gap-2 text-white font-semibold",
                    span { class: "text-orange-400", "▣" }
                    span { "HMS" }
                }

                // Desktop navigation
                nav { class: "hidden md:flex items-center gap-2",
                    for link in links.iter() {
                        Link {
                            key: "{link.id}",
                            to: link.route.clone(),
                            class: nav_link_class(link.id).to_string(),
                            "{link.label}"
                        }
                    }
                }

                div { class: "flex items-center gap-3",
                    if let Some(me) = me.as_ref() {
                        span { class: "text-slate-200 text-sm hidden sm:block", "Hi, {me.name}" }
                        button {
                            class: "inline-flex items-center gap-2 px-3 py-1.5 rounded-lg bg-orange-500 text-white hover:bg-orange-600 transition",
                            r#type: "button",
                            onclick: logout,
                            "Logout"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "inline-flex items-center gap-2 px-3 py-1.5 rounded-lg bg-white/10 text-white hover:bg-white/20 transition",
                            "Login"
                        }
                    }

                    // Mobile menu button
                    button {
                        class: "md:hidden inline-flex items-center justify-center p-2 rounded-md text-slate-300 hover:text-white focus:outline-none",
                        r#type: "button",
                        onclick: move |_| menu_open.toggle(),
                        span { class: "sr-only", "Toggle menu" }
                        if menu_open() {
                            // X icon
                            svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                            }
                        } else {
                            // Hamburger icon
                            svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                            }
                        }
                    }
                }
            }

            // Mobile menu
            div { class: "{mobile_menu_class}", id: "mobile-menu",
                div { class: "px-2 pt-2 pb-3 space-y-1",
                    for link in links.iter() {
                        Link {
                            key: "m-{link.id}",
                            to: link.route.clone(),
                            class: nav_link_class(link.id).to_string(),
                            onclick: move |_| menu_open.set(false),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
