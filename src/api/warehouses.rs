//! Collection point (warehouse) endpoints.

use crate::types::{CountryCode, Warehouse};
use crate::{Client, Request, Result};

impl Client {
    /// Lists the collection points registered for the authenticated
    /// merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn warehouses(&self) -> Result<Vec<Warehouse>> {
        let request =
            Request::get("users/collection-points").content_type(super::MEDIA_COLLECTION_POINTS_V1);
        self.send_json(request).await
    }

    /// Returns the collection point closest to a postal code.
    ///
    /// `country` defaults to `SE` when omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails, including when the
    /// postal code is not served.
    pub async fn closest_warehouse(
        &self,
        postal_code: &str,
        country: Option<CountryCode>,
    ) -> Result<Warehouse> {
        let country = country.unwrap_or_default();
        let request = Request::get(format!("postalcodes/validate/{country}/{postal_code}"))
            .content_type(super::MEDIA_POSTAL_CODES_V1);
        self.send_json(request).await
    }
}
