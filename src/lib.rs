//! # Instabox - a typed client for the Instabox parcel delivery API
//!
//! This crate wraps the Instabox HTTP API in typed async methods: listing
//! collection points, querying delivery windows, creating and cancelling
//! orders, managing parcels, booking returns, and browsing the locker
//! network. Authentication, environment selection (production vs. staging)
//! and response-status classification are handled in one place.
//!
//! ## Quick start
//!
//! ```no_run
//! use instabox::{Client, IntervalQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), instabox::Error> {
//!     let client = Client::builder()
//!         .key("my-api-key")
//!         .secret("my-api-secret")
//!         .test(true) // staging; drop for production
//!         .build()?;
//!
//!     // Where can we deliver next week?
//!     let windows = client
//!         .delivery_windows("11157", IntervalQuery::days(7), None)
//!         .await?;
//!     println!("{} delivery windows offered", windows.len());
//!
//!     // Which lockers serve the postal code?
//!     let lockers = client.lockers_in_region("11157", None).await?;
//!     for locker in lockers {
//!         println!("{}: {}, {}", locker.id, locker.name, locker.city);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **One client, one environment.** Credentials are combined into a
//!   `Basic` token once at construction; the `test` flag picks staging or
//!   production for the client's lifetime. The client is cheap to clone
//!   and safe to share; it holds no per-call state.
//! - **Status classification.** A response counts as successful only for
//!   status codes in `[200, 399]`. Anything else fails with
//!   [`Error::Status`] carrying the raw body for inspection - the library
//!   never interprets server error payloads.
//! - **No retries.** Every failure surfaces to the caller unchanged.
//!   Retry policy, if any, belongs to the application.
//! - **Cancellation.** [`Client::with_cancellation`] scopes calls to a
//!   [`CancellationToken`]; firing the token aborts the in-flight call
//!   with [`Error::Cancelled`] and nothing else.
//!
//! ## Errors
//!
//! ```no_run
//! use instabox::{Client, Error};
//!
//! # async fn example(client: Client) -> Result<(), Error> {
//! match client.order("ord_123").await {
//!     Ok(order) => println!("{}: {}", order.id, order.status),
//!     Err(Error::Status { status, body, .. }) => {
//!         eprintln!("API error {status}: {body}");
//!     }
//!     Err(e) => eprintln!("transport error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod error;
mod request;
pub mod types;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use request::Request;
pub use types::{
    Address, BoxDelivery, Cart, Consumer, CountryCode, CreateDropOff, CreateOrder, CreatePickup,
    DeliveryInfo, DropOff, Interval, IntervalQuery, Locker, NewParcel, Order, Parcel, Pickup,
    TimeWindow, Warehouse,
};

/// Re-exported so callers don't need a direct `tokio-util` dependency to
/// cancel calls.
pub use tokio_util::sync::CancellationToken;
