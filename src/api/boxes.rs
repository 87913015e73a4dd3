//! Locker ("box") network endpoints.

use crate::types::{CountryCode, Locker};
use crate::{Client, Request, Result};
use serde::Deserialize;

/// Envelope around locker list responses.
#[derive(Debug, Deserialize)]
struct LockerList {
    lockers: Vec<Locker>,
}

impl Client {
    /// Fetches a locker by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn locker(&self, id: &str) -> Result<Locker> {
        let request = Request::get(format!("boxes/{id}")).content_type(super::MEDIA_BOXES_V1);
        self.send_json(request).await
    }

    /// Lists every locker in a country.
    ///
    /// `country` defaults to `SE` when omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn lockers(&self, country: Option<CountryCode>) -> Result<Vec<Locker>> {
        let country = country.unwrap_or_default();
        let request =
            Request::get(format!("boxes/all/{country}")).content_type(super::MEDIA_BOXES_V1);
        let envelope: LockerList = self.send_json(request).await?;
        Ok(envelope.lockers)
    }

    /// Lists the lockers serving a postal code.
    ///
    /// The postal code must already be validated; this endpoint does not
    /// validate it. `country` defaults to `SE` when omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn lockers_in_region(
        &self,
        postal_code: &str,
        country: Option<CountryCode>,
    ) -> Result<Vec<Locker>> {
        let country = country.unwrap_or_default();
        let request = Request::get(format!("boxes/postalcodes/validate/{country}/{postal_code}"))
            .content_type(super::MEDIA_BOXES_V1);
        let envelope: LockerList = self.send_json(request).await?;
        Ok(envelope.lockers)
    }
}
