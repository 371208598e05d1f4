//! Routed screens.
//!
//! Each page fetches what it needs on mount through the shared
//! [`ApiClient`](crate::api::ApiClient) and keeps its own local state.

mod admin;
mod bookings;
mod home;
mod login;
mod reception;
mod register;
mod rooms;
mod services;

pub use admin::Admin;
pub use bookings::Bookings;
pub use home::Home;
pub use login::Login;
pub use reception::Reception;
pub use register::Register;
pub use rooms::Rooms;
pub use services::Services;
