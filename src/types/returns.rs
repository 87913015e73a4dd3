//! Return bookings: pickups at the consumer's address and drop-offs at a
//! locker. Neither is tied to an existing order.

use super::Consumer;
use serde::{Deserialize, Serialize};

/// Payload for booking a pickup at the consumer's address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePickup {
    pub consumer: Consumer,
    pub parcel_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A booked pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pickup {
    pub id: String,
    pub status: String,
    pub consumer: Consumer,
    pub parcel_count: u32,
}

/// Payload for booking a drop-off at a locker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDropOff {
    /// The locker the consumer will leave the parcel in.
    pub locker_id: String,
    pub consumer: Consumer,
    pub parcel_count: u32,
}

/// A booked drop-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropOff {
    pub id: String,
    pub locker_id: String,
    /// Door code the consumer uses at the locker, when the API issues one.
    #[serde(default)]
    pub door_code: Option<String>,
}
