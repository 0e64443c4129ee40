use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use super::UtcDateTime;
use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Inclusive window of `YYYY-MM-DD` dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, ValidationError> {
        let start = start.into();
        let end = end.into();

        if parse_date(&start)? > parse_date(&end)? {
            return Err(ValidationError::InvertedDateRange { start, end });
        }

        Ok(Self { start, end })
    }
}

fn parse_date(value: &str) -> Result<Date, ValidationError> {
    Date::parse(value, ISO_DATE).map_err(|_| ValidationError::InvalidDate {
        value: value.to_owned(),
    })
}

/// Client-side log entry for one price lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryHistoryItem {
    pub ticker: String,
    pub date_range: DateRange,
    pub timestamp: UtcDateTime,
}

impl QueryHistoryItem {
    /// Record a lookup made now.
    pub fn new(ticker: &str, date_range: DateRange) -> Result<Self, ValidationError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }

        Ok(Self {
            ticker: ticker.to_ascii_uppercase(),
            date_range,
            timestamp: UtcDateTime::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        let err = DateRange::new("2024-02-01", "2024-01-01").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvertedDateRange { .. }));
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = DateRange::new("2024/01/01", "2024-01-31").expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::InvalidDate {
                value: String::from("2024/01/01")
            }
        );
    }

    #[test]
    fn history_entry_normalizes_ticker() {
        let range = DateRange::new("2024-01-01", "2024-01-01").expect("same-day range");
        let item = QueryHistoryItem::new(" spy ", range).expect("valid");
        assert_eq!(item.ticker, "SPY");
    }

    #[test]
    fn empty_ticker_is_rejected() {
        let range = DateRange::new("2024-01-01", "2024-01-31").expect("valid");
        let err = QueryHistoryItem::new("   ", range).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyTicker);
    }
}
