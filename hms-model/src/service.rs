//! Guest service requests.

use serde::{Deserialize, Serialize};

use crate::id::{Id, Keyed};

/// A guest-submitted task tracked by the front desk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: Id,
    pub guest_id: Id,
    #[serde(rename = "type")]
    pub kind: ServiceType,
    #[serde(default)]
    pub description: String,
    /// Assigned by the server ("Pending", "Resolved", ...)
    #[serde(default)]
    pub status: String,
}

impl Keyed for ServiceRequest {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// `POST /api/services` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceRequest {
    pub guest_id: Id,
    #[serde(rename = "type")]
    pub kind: ServiceType,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceType {
    #[default]
    Cleaning,
    Laundry,
    Food,
    Maintenance,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Cleaning,
        ServiceType::Laundry,
        ServiceType::Food,
        ServiceType::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cleaning => "Cleaning",
            Self::Laundry => "Laundry",
            Self::Food => "Food",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
