//! Domain records exchanged with the API.
//!
//! All types here are plain serde structs mirroring JSON resources; they
//! carry no behavior beyond (de)serialization. Relationships between
//! resources are referential by ID and are enforced server-side only.

mod common;
mod interval;
mod locker;
mod order;
mod parcel;
mod returns;
mod warehouse;

pub use common::{Address, Consumer, CountryCode};
pub use interval::{Interval, IntervalQuery, TimeWindow};
pub use locker::Locker;
pub use order::{BoxDelivery, Cart, CreateOrder, DeliveryInfo, Order};
pub use parcel::{NewParcel, Parcel};
pub use returns::{CreateDropOff, CreatePickup, DropOff, Pickup};
pub use warehouse::Warehouse;
