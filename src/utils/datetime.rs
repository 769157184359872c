//! Centralized datetime handling utilities
//!
//! Show dates arrive from the action layer as strings in a handful of
//! formats. This module provides the one place that turns them into
//! `DateTime<Utc>` values for storage and comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors that can occur during datetime parsing
#[derive(Error, Debug)]
pub enum DateTimeError {
    /// Invalid datetime format provided
    #[error("Invalid datetime format: '{input}' - expected RFC3339 (2024-06-01T20:00:00Z), '2024-06-01 20:00:00' or '2024-06-01'")]
    InvalidFormat { input: String },
}

/// Centralized datetime parsing utilities
pub struct DateTimeParser;

impl DateTimeParser {
    /// Parse a datetime from the formats accepted on the wire
    ///
    /// Supports:
    /// - RFC3339 with timezone: "2024-06-01T20:00:00Z" / "+02:00" offsets
    /// - SQLite style (assumed UTC): "2024-06-01 20:00:00"
    /// - ISO without timezone (assumed UTC): "2024-06-01T20:00:00"
    /// - Date only (midnight UTC): "2024-06-01"
    pub fn parse_flexible(input: &str) -> Result<DateTime<Utc>, DateTimeError> {
        let trimmed = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(naive.and_utc());
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(naive.and_utc());
            }
        }

        Err(DateTimeError::InvalidFormat {
            input: trimmed.to_string(),
        })
    }

    /// Whether the input parses as a datetime at all
    pub fn is_parseable(input: &str) -> bool {
        Self::parse_flexible(input).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc3339_with_utc() {
        let dt = DateTimeParser::parse_flexible("2024-06-01T20:00:00Z").unwrap();
        assert_eq!(dt.hour(), 20);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = DateTimeParser::parse_flexible("2024-06-01T22:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 20);
    }

    #[test]
    fn parses_sqlite_format_as_utc() {
        let dt = DateTimeParser::parse_flexible("2024-06-01 20:00:00").unwrap();
        assert_eq!(dt.hour(), 20);
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = DateTimeParser::parse_flexible("2024-06-01").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(DateTimeParser::parse_flexible("next friday").is_err());
        assert!(!DateTimeParser::is_parseable(""));
    }
}
