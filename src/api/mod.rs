//! Endpoint method set: one method per logical API operation.
//!
//! Each module covers one resource family and contributes an `impl Client`
//! block: it builds the request path, sets the operation's vendor media
//! type, serializes write payloads and parses (and, where the server wraps
//! the payload in an envelope, unwraps) read responses.

mod boxes;
mod orders;
mod postal;
mod returns;
mod warehouses;

// Version-specific vendor media types. Each string is a fixed part of the
// server contract for its operation; the server behaves differently per
// version, so these must not drift.
pub(crate) const MEDIA_COLLECTION_POINTS_V1: &str =
    "application/vnd.instabox.collection-points-v1+json";
pub(crate) const MEDIA_POSTAL_CODES_V1: &str = "application/vnd.instabox.postalcodes-v1+json";
pub(crate) const MEDIA_INTERVALS_V2: &str = "application/vnd.instabox.intervals-v2+json";
pub(crate) const MEDIA_ORDERS_V2: &str = "application/vnd.instabox.orders-v2+json";
pub(crate) const MEDIA_PARCELS_V1: &str = "application/vnd.instabox.parcels-v1+json";
pub(crate) const MEDIA_TRACKING_V1: &str = "application/vnd.instabox.tracking-v1+json";
pub(crate) const MEDIA_RETURNS_V1: &str = "application/vnd.instabox.returns-v1+json";
pub(crate) const MEDIA_BOX_RETURN_V1: &str = "application/vnd.instabox.box-return-v1+json";
pub(crate) const MEDIA_BOXES_V1: &str = "application/vnd.instabox.boxes-v1+json";
