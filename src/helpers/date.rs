//! Date helper functions

use chrono::NaiveDate;

use crate::error::{Result, SiteError};

/// Date used for content files without a date prefix
pub const DEFAULT_DATE: &str = "1970-01-01";

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| SiteError::InvalidDate {
        date: date.to_string(),
        source,
    })
}

/// Format a date as an ISO `YYYY-MM-DD` string
pub fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date for RSS feeds, fixed at midnight UTC
///
/// # Examples
/// ```ignore
/// rfc_2822_date(&date) // -> "Wed, 01 Jan 2020 00:00:00 +0000"
/// ```
pub fn rfc_2822_date(date: &NaiveDate) -> String {
    date.format("%a, %d %b %Y 00:00:00 +0000").to_string()
}
