//! Wire types for the hotel management REST API.
//!
//! These are the JSON shapes the web client exchanges with the API server.
//! The client treats them as opaque DTOs: beyond field access it enforces
//! nothing the server does not.
//!
//! # Modules
//! - [`id`] - Opaque identifiers and list patching helpers
//! - [`user`] - Identity, roles, capabilities and auth payloads
//! - [`room`] - Rooms and the admin create payload
//! - [`booking`] - Bookings
//! - [`service`] - Guest service requests
//! - [`error`] - Server error bodies

pub mod booking;
pub mod error;
pub mod id;
pub mod room;
pub mod service;
pub mod user;

// Re-export commonly used types at crate root
pub use booking::Booking;
pub use error::ErrorBody;
pub use id::{prepend, remove_by_id, Id, Keyed};
pub use room::{NewRoom, Room, RoomStatus, RoomType};
pub use service::{NewServiceRequest, ServiceRequest, ServiceType};
pub use user::{Capability, Identity, LoginRequest, LoginResponse, Registration, Role};
