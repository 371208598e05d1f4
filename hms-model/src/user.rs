//! Identity, roles and authentication payloads.

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// The signed-in user as reported by `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

impl Identity {
    /// Shorthand for `self.role.allows(capability)`.
    pub fn allows(&self, capability: Capability) -> bool {
        self.role.allows(capability)
    }
}

/// User role.
///
/// Registration offers the three known roles. Any other label the API
/// reports decodes as `Unknown`, which keeps the user signed in but carries
/// no capabilities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum Role {
    #[default]
    Guest,
    Receptionist,
    Admin,
    Unknown,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Guest, Role::Receptionist, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::Receptionist => "Receptionist",
            Self::Admin => "Admin",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse the wire label (exact match, as the API sends it).
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// Whether this role carries `capability`.
    ///
    /// Each dashboard belongs to exactly one role. Admins do not inherit the
    /// reception dashboard.
    pub fn allows(&self, capability: Capability) -> bool {
        matches!(
            (self, capability),
            (Self::Receptionist, Capability::ViewReception) | (Self::Admin, Capability::ManageRooms)
        )
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        Self::parse(&label).unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-gated features of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Reception dashboard (all bookings, front desk actions)
    ViewReception,
    /// Admin dashboard (room inventory)
    ManageRooms,
}

/// `POST /api/auth/login` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
}

/// `POST /api/auth/register` body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl Registration {
    /// Credentials for the login that follows a successful registration.
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
