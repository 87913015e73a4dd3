//! Postal code and delivery window endpoints.

use crate::types::{CountryCode, Interval, IntervalQuery};
use crate::{Client, Request, Result};

impl Client {
    /// Lists the postal codes served in a country.
    ///
    /// `country` defaults to `SE` when omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn postal_codes(&self, country: Option<CountryCode>) -> Result<Vec<String>> {
        let country = country.unwrap_or_default();
        let request =
            Request::get(format!("postalcodes/{country}")).content_type(super::MEDIA_POSTAL_CODES_V1);
        self.send_json(request).await
    }

    /// Lists the delivery windows offered for a postal code.
    ///
    /// `query` selects how far ahead to look: a day count renders into the
    /// path as a bare integer, a date range as `YYYY-MM-DD/YYYY-MM-DD`.
    /// `country` defaults to `SE` when omitted.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use instabox::{Client, IntervalQuery};
    ///
    /// # async fn example(client: Client) -> Result<(), instabox::Error> {
    /// // Windows over the next seven days.
    /// let windows = client.delivery_windows("11359", 7, None).await?;
    /// println!("{} windows offered", windows.len());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn delivery_windows(
        &self,
        postal_code: &str,
        query: impl Into<IntervalQuery>,
        country: Option<CountryCode>,
    ) -> Result<Vec<Interval>> {
        let country = country.unwrap_or_default();
        let query = query.into();
        let request = Request::get(format!("intervals/{country}/{postal_code}/{query}"))
            .content_type(super::MEDIA_INTERVALS_V2);
        self.send_json(request).await
    }
}
