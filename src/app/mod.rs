//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod format;
pub mod pages;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

use crate::api::ApiClient;
use pages::{Admin, Bookings, Home, Login, Reception, Register, Rooms, Services};
use session::use_session_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // One API client and one session for every screen
    use_context_provider(ApiClient::for_platform);
    use_session_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/rooms")]
    Rooms {},
    #[route("/bookings")]
    Bookings {},
    #[route("/services")]
    Services {},
    #[route("/reception")]
    Reception {},
    #[route("/admin")]
    Admin {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        let cases = [
            (Route::Home {}, "/"),
            (Route::Login {}, "/login"),
            (Route::Register {}, "/register"),
            (Route::Rooms {}, "/rooms"),
            (Route::Bookings {}, "/bookings"),
            (Route::Services {}, "/services"),
            (Route::Reception {}, "/reception"),
            (Route::Admin {}, "/admin"),
        ];
        for (route, path) in cases {
            assert_eq!(route.to_string(), path);
            assert_eq!(path.parse::<Route>().ok(), Some(route));
        }
    }
}
