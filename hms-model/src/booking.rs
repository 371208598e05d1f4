//! Booking records.

use serde::{Deserialize, Serialize};

use crate::id::{Id, Keyed};

/// A stay, as returned by `/api/bookings` and `/api/bookings/user/{id}`.
///
/// Check-in/check-out are kept as the API's date strings; the UI formats
/// them for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Id,
    pub guest_id: Id,
    pub room_id: Id,
    pub check_in: String,
    pub check_out: String,
    pub total_amount: f64,
    pub status: String,
}

impl Keyed for Booking {
    fn id(&self) -> &Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_deserialization() {
        let b: Booking = serde_json::from_str(
            r#"{
                "id": 9,
                "guestId": "u1",
                "roomId": 101,
                "checkIn": "2025-03-01T14:00:00Z",
                "checkOut": "2025-03-04",
                "totalAmount": 420.0,
                "status": "Confirmed"
            }"#,
        )
        .unwrap();

        assert_eq!(b.id, Id::from(9));
        assert_eq!(b.guest_id, Id::from("u1"));
        assert_eq!(b.room_id.to_string(), "101");
        assert_eq!(b.check_out, "2025-03-04");
        assert_eq!(b.status, "Confirmed");
    }
}
