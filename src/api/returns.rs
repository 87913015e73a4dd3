//! Return booking endpoints: pickups and locker drop-offs.

use crate::types::{CreateDropOff, CreatePickup, DropOff, Pickup};
use crate::{Client, Request, Result};

impl Client {
    /// Books a pickup at the consumer's address.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_pickup(&self, pickup: &CreatePickup) -> Result<Pickup> {
        let request = Request::post("returns")
            .content_type(super::MEDIA_RETURNS_V1)
            .json(pickup)?;
        self.send_json(request).await
    }

    /// Books a drop-off at a locker.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_drop_off(&self, drop_off: &CreateDropOff) -> Result<DropOff> {
        let request = Request::post("box/return")
            .content_type(super::MEDIA_BOX_RETURN_V1)
            .json(drop_off)?;
        self.send_json(request).await
    }
}
