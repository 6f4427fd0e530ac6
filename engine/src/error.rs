//! Engine error types

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date format: '{input}' (expected YYYY-MM-DD)")]
    InvalidDateFormat { input: String },

    #[error("Birth date {birth_date} is after the current date {today}")]
    InvalidDateRange { birth_date: NaiveDate, today: NaiveDate },

    #[error("Age cannot be negative: {age}")]
    InvalidAge { age: i64 },

    #[error("Progress target must be nonzero")]
    InvalidTarget,

    #[error("Amount must be a finite number, got {value}")]
    InvalidAmount { value: f64 },

    #[error("Unsupported snapshot version: {version}")]
    UnsupportedSnapshotVersion { version: u8 },

    #[error("Snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidDateFormat { input: "15/06/2000".into() };
        assert_eq!(err.to_string(), "Invalid date format: '15/06/2000' (expected YYYY-MM-DD)");

        let err = EngineError::InvalidAge { age: -3 };
        assert_eq!(err.to_string(), "Age cannot be negative: -3");

        let err = EngineError::InvalidDateRange {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        };
        assert_eq!(err.to_string(), "Birth date 2030-01-01 is after the current date 2024-06-15");
    }
}
