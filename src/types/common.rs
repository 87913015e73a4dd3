//! Types shared across resource families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 3166-1 alpha-2 country code.
///
/// The markets the API documents are enumerated; any other code round-trips
/// through [`CountryCode::Other`] untouched, since the set of served
/// countries is open-ended on the server side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CountryCode {
    Se,
    No,
    Dk,
    Fi,
    De,
    Nl,
    /// A country code outside the documented markets, passed through as-is.
    Other(String),
}

impl CountryCode {
    /// The upper-case two-letter code as it appears in paths and payloads.
    pub fn as_str(&self) -> &str {
        match self {
            CountryCode::Se => "SE",
            CountryCode::No => "NO",
            CountryCode::Dk => "DK",
            CountryCode::Fi => "FI",
            CountryCode::De => "DE",
            CountryCode::Nl => "NL",
            CountryCode::Other(code) => code,
        }
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        CountryCode::Se
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CountryCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "SE" => CountryCode::Se,
            "NO" => CountryCode::No,
            "DK" => CountryCode::Dk,
            "FI" => CountryCode::Fi,
            "DE" => CountryCode::De,
            "NL" => CountryCode::Nl,
            _ => CountryCode::Other(code),
        }
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

/// A street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub postal_code: String,
    pub city: String,
    #[serde(default)]
    pub country: CountryCode,
}

/// Delivery contact details for an order or return booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_country_codes_round_trip() {
        let json = serde_json::to_string(&CountryCode::Se).unwrap();
        assert_eq!(json, "\"SE\"");
        let parsed: CountryCode = serde_json::from_str("\"NO\"").unwrap();
        assert_eq!(parsed, CountryCode::No);
    }

    #[test]
    fn unknown_country_codes_pass_through() {
        let parsed: CountryCode = serde_json::from_str("\"PL\"").unwrap();
        assert_eq!(parsed, CountryCode::Other("PL".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"PL\"");
    }

    #[test]
    fn default_country_is_sweden() {
        assert_eq!(CountryCode::default(), CountryCode::Se);
    }
}
