//! Lockers ("boxes"): automated parcel pickup and drop-off points.

use super::CountryCode;
use serde::{Deserialize, Serialize};

/// An automated parcel locker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locker {
    pub id: String,
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    #[serde(default)]
    pub country: CountryCode,
    /// Whether the locker is currently shown to consumers.
    #[serde(default)]
    pub visible: bool,
}
