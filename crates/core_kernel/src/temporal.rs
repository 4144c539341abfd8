//! Lease dates and calendar months
//!
//! Lease dates are exchanged as text in `dd/mm/yyyy` form. Pricing and the
//! receipt ledger work at month granularity, so most comparisons go through
//! [`YearMonth`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Textual format of every lease date
pub const LEASE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}': expected dd/mm/yyyy")]
    InvalidDate(String),

    #[error("Month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// Parses a `dd/mm/yyyy` lease date
pub fn parse_lease_date(input: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(input.trim(), LEASE_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(input.to_string()))
}

/// Formats a date as `dd/mm/yyyy`
pub fn format_lease_date(date: NaiveDate) -> String {
    date.format(LEASE_DATE_FORMAT).to_string()
}

/// A calendar month of a given year
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, validating the month ordinal
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The year-month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the following month, rolling over into the next year
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Iterates the twelve months of a year, January first
    pub fn months_of(year: i32) -> impl Iterator<Item = YearMonth> {
        (1..=12).map(move |month| YearMonth { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// The occupancy period of a lease
///
/// `end` is inclusive; `None` means the lease runs indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeasePeriod {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl LeasePeriod {
    /// Creates a lease period, rejecting an end before the start
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if end < start {
                return Err(TemporalError::InvalidPeriod {
                    start: format_lease_date(start),
                    end: format_lease_date(end),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Parses a lease period from its textual dates
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, TemporalError> {
        let start = parse_lease_date(start)?;
        let end = end
            .filter(|e| !e.trim().is_empty())
            .map(parse_lease_date)
            .transpose()?;
        Self::new(start, end)
    }

    /// Month the lease starts in
    pub fn start_month(&self) -> YearMonth {
        YearMonth::of(self.start)
    }

    /// Returns true if the date falls within the lease
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}
