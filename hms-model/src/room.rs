//! Room inventory types.

use serde::{Deserialize, Serialize};

use crate::id::{Id, Keyed};

/// A hotel room as listed by `GET /api/rooms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Id,

    /// Door number, free text ("101", "A-12")
    pub room_number: String,

    #[serde(rename = "type")]
    pub kind: RoomType,

    /// Nightly rate
    pub price: f64,

    pub status: RoomStatus,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,
}

impl Keyed for Room {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// `POST /api/rooms` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_number: String,
    #[serde(rename = "type")]
    pub kind: RoomType,
    pub price: f64,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub status: RoomStatus,
}

impl Default for NewRoom {
    fn default() -> Self {
        Self {
            room_number: String::new(),
            kind: RoomType::Single,
            price: 100.0,
            images: Vec::new(),
            features: Vec::new(),
            status: RoomStatus::Available,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomType {
    #[default]
    Single,
    Double,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Deluxe,
        RoomType::Suite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Housekeeping / occupancy state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomStatus {
    #[default]
    Available,
    Booked,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 4] = [
        RoomStatus::Available,
        RoomStatus::Booked,
        RoomStatus::Cleaning,
        RoomStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Cleaning => "Cleaning",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_deserialization() {
        let room: Room = serde_json::from_str(
            r#"{
                "id": "r1",
                "roomNumber": "101",
                "type": "Deluxe",
                "price": 189.5,
                "status": "Cleaning",
                "images": ["a.jpg"]
            }"#,
        )
        .unwrap();

        assert_eq!(room.room_number, "101");
        assert_eq!(room.kind, RoomType::Deluxe);
        assert_eq!(room.status, RoomStatus::Cleaning);
        assert_eq!(room.images, vec!["a.jpg".to_string()]);
        assert!(room.features.is_empty());
    }

    #[test]
    fn test_new_room_defaults_match_admin_form() {
        let json = serde_json::to_value(NewRoom::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "roomNumber": "",
                "type": "Single",
                "price": 100.0,
                "images": [],
                "features": [],
                "status": "Available"
            })
        );
    }

    #[test]
    fn test_labels_parse_back() {
        for t in RoomType::ALL {
            assert_eq!(RoomType::parse(t.as_str()), Some(t));
        }
        for s in RoomStatus::ALL {
            assert_eq!(RoomStatus::parse(&s.to_string()), Some(s));
        }
        assert_eq!(RoomType::parse("Penthouse"), None);
    }
}
