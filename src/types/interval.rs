//! Delivery intervals and interval queries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A time window in UTC, transferred as Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_at: DateTime<Utc>,
}

/// A paired collection/delivery window offered for a postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub id: String,
    pub collection: TimeWindow,
    pub delivery: TimeWindow,
}

/// How far ahead to look for delivery windows.
///
/// Rendered into the request path either as a bare count of days or as two
/// calendar dates joined by a slash, e.g. `7` or `2024-01-01/2024-01-07`.
/// Dates are formatted `%Y-%m-%d`, independent of locale.
///
/// # Examples
///
/// ```
/// use instabox::IntervalQuery;
/// use chrono::NaiveDate;
///
/// assert_eq!(IntervalQuery::days(7).to_string(), "7");
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(IntervalQuery::range(from, to).to_string(), "2024-01-01/2024-01-07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalQuery {
    /// The next `n` days.
    Days(u32),
    /// An explicit date range, both endpoints inclusive.
    Range {
        from: NaiveDate,
        to: NaiveDate,
    },
}

impl IntervalQuery {
    /// Queries the next `count` days.
    pub fn days(count: u32) -> Self {
        IntervalQuery::Days(count)
    }

    /// Queries an explicit date range.
    pub fn range(from: NaiveDate, to: NaiveDate) -> Self {
        IntervalQuery::Range { from, to }
    }
}

impl fmt::Display for IntervalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalQuery::Days(count) => write!(f, "{count}"),
            IntervalQuery::Range { from, to } => {
                write!(f, "{}/{}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"))
            }
        }
    }
}

impl From<u32> for IntervalQuery {
    fn from(count: u32) -> Self {
        IntervalQuery::Days(count)
    }
}

impl From<(NaiveDate, NaiveDate)> for IntervalQuery {
    fn from((from, to): (NaiveDate, NaiveDate)) -> Self {
        IntervalQuery::Range { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_count_renders_bare() {
        assert_eq!(IntervalQuery::days(7).to_string(), "7");
        assert_eq!(IntervalQuery::from(14).to_string(), "14");
    }

    #[test]
    fn range_renders_iso_dates_joined_by_slash() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(
            IntervalQuery::range(from, to).to_string(),
            "2024-01-01/2024-01-07"
        );
        assert_eq!(IntervalQuery::from((from, to)), IntervalQuery::range(from, to));
    }

    #[test]
    fn single_digit_components_are_zero_padded() {
        let query = IntervalQuery::range(
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        );
        assert_eq!(query.to_string(), "2024-03-04/2024-03-09");
    }

    #[test]
    fn time_windows_use_epoch_milliseconds() {
        let window: TimeWindow =
            serde_json::from_str(r#"{"startAt":1704103200000,"endAt":1704110400000}"#).unwrap();
        assert_eq!(window.start_at.timestamp_millis(), 1_704_103_200_000);
        let json = serde_json::to_string(&window).unwrap();
        assert!(json.contains("1704103200000"));
    }
}
