//! Orders: delivery bookings combining a cart, a consumer and an interval.

use super::{Consumer, Interval, Parcel};
use serde::{Deserialize, Serialize};

/// The merchant cart an order was created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub cart_id: String,
    pub item_count: u32,
}

/// Locker selection attached to a box delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxDelivery {
    pub selected_box: String,
}

/// Payload for creating an order.
///
/// `product_codes` and `box_delivery` are normally left as `None`; the box
/// order operation fills them in itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub cart: Cart,
    pub consumer: Consumer,
    /// The warehouse the parcels are collected from.
    pub collection_point_id: String,
    /// The delivery interval chosen for this booking.
    pub interval_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_codes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_delivery: Option<BoxDelivery>,
}

/// An order as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Order state as reported by the server. The set of states is not
    /// part of this library's contract, so it stays an open string.
    pub status: String,
    pub consumer: Consumer,
    pub cart: Cart,
    /// The warehouse referenced as collection point, by id.
    #[serde(default)]
    pub collection_point_id: Option<String>,
    /// The delivery interval booked for this order, when assigned.
    #[serde(default)]
    pub interval: Option<Interval>,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
}

/// Partial consumer update for an existing order.
///
/// The delivery address deliberately cannot be changed this way; only
/// contact details are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
