//! Age Calculator
//!
//! Derives a person's age in completed years from their birth date.
//! "Today" is always passed in by the caller so results stay reproducible.

use chrono::{DateTime, Datelike, Local, NaiveDate};
#[cfg(test)]
use chrono::Months;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EngineError, Result};

/// Calendar date of birth, serialized as an ISO-8601 date string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(pub NaiveDate);

impl BirthDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|ts| Self(ts.date_naive()))
            .map_err(|_| EngineError::InvalidDateFormat {
                input: input.to_string(),
            })
    }

    /// Latest birth date at which someone is `years` old on `today`.
    /// A 29 February `today` maps to 28 February in non-leap years.
    #[cfg(test)]
    pub(crate) fn from_age(years: u32, today: NaiveDate) -> Self {
        Self(
            today
                .checked_sub_months(Months::new(years.saturating_mul(12)))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Completed years on `today`. The count only increments once the
    /// month/day anniversary has been reached.
    pub fn age_years(&self, today: NaiveDate) -> Result<u32> {
        let birth = self.0;
        if birth > today {
            return Err(EngineError::InvalidDateRange {
                birth_date: birth,
                today,
            });
        }

        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }

        // birth <= today guarantees years >= 0
        Ok(years as u32)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Current date on the local clock. Library functions never call this
/// themselves; entry points (CLI, bindings) do and pass the result down.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Age in completed years for an ISO birth date string
pub fn calculate_age(birth_date: &str, today: NaiveDate) -> Result<u32> {
    let birth = BirthDate::parse(birth_date).map_err(|e| {
        warn!(input = birth_date, "rejected birth date");
        e
    })?;

    let age = birth.age_years(today).map_err(|e| {
        warn!(%birth, %today, "birth date is in the future");
        e
    })?;

    debug!(%birth, %today, age, "calculated age");
    Ok(age)
}
