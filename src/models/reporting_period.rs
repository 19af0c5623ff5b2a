//! Reporting period model.
//!
//! A [`ReportingPeriod`] is the (month, year) pair that every tenure and
//! aggregate query is evaluated against.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The month and year a payroll run is evaluated for.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod::new(12, 2021).unwrap();
/// let from_date = ReportingPeriod::from_date(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
/// assert_eq!(period, from_date);
/// assert_eq!(period.to_string(), "12/2021");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The month (1-12).
    pub month: u32,
    /// The year.
    pub year: i32,
}

impl ReportingPeriod {
    /// Creates a reporting period, rejecting months outside 1..=12 and years
    /// outside the `chrono` calendar.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        let period = Self { month, year };
        period.validate()?;
        Ok(period)
    }

    /// Returns the period containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// Checks the month and year range of a period, e.g. one produced by deserialization.
    pub fn validate(&self) -> EngineResult<()> {
        if (1..=12).contains(&self.month)
            && NaiveDate::from_ymd_opt(self.year, self.month, 1).is_some()
        {
            Ok(())
        } else {
            Err(EngineError::InvalidReportingPeriod {
                month: self.month,
                year: self.year,
            })
        }
    }
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
