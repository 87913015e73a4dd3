//! Parcels: the shipment units of an order.

use serde::{Deserialize, Serialize};

/// Payload for adding a parcel to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewParcel {
    /// Merchant-side reference, echoed back on the created parcel.
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_grams: Option<u32>,
}

/// A parcel as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: String,
    pub barcode: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub weight_grams: Option<u32>,
}
