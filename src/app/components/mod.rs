//! Shared UI components for the Dioxus web UI.

pub mod gate;
pub mod layout;
pub mod nav;

pub use gate::RoleGate;
pub use layout::Layout;
pub use nav::{nav_links, Nav, NavLink};
