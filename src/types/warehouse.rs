//! Merchant collection points.

use super::CountryCode;
use serde::{Deserialize, Serialize};

/// A merchant-registered facility where parcels originate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    #[serde(default)]
    pub country: CountryCode,
}
