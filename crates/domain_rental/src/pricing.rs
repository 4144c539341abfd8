//! Price schedules and the price lookup rule
//!
//! A schedule is an unordered list of `(effective_from, amount)` entries. The
//! amount due for a month is the one from the most recent entry that has
//! taken effect by that month; an entry effective on any day of a month
//! applies to the whole month.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::YearMonth;

/// Errors raised by a price lookup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("No price effective by {0}")]
    PriceNotFound(YearMonth),
}

/// One price point of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// First day the amount applies
    pub effective_from: NaiveDate,
    /// Monthly amount
    pub amount: Decimal,
}

impl PriceEntry {
    pub fn new(effective_from: NaiveDate, amount: Decimal) -> Self {
        Self { effective_from, amount }
    }

    /// Month from which this entry applies
    pub fn effective_month(&self) -> YearMonth {
        YearMonth::of(self.effective_from)
    }
}

/// The price history of one amount (rent or charges)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSchedule {
    entries: Vec<PriceEntry>,
}

impl PriceSchedule {
    pub fn new(entries: Vec<PriceEntry>) -> Self {
        Self { entries }
    }

    /// A schedule with a single amount effective from `from`
    pub fn starting(from: NaiveDate, amount: Decimal) -> Self {
        Self {
            entries: vec![PriceEntry::new(from, amount)],
        }
    }

    /// Adds a price change
    pub fn with_change(mut self, from: NaiveDate, amount: Decimal) -> Self {
        self.entries.push(PriceEntry::new(from, amount));
        self
    }

    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first negative entry, if any
    pub fn first_negative(&self) -> Option<&PriceEntry> {
        self.entries.iter().find(|e| e.amount.is_sign_negative() && !e.amount.is_zero())
    }
}

/// Resolves the amount a schedule prescribes for a month
pub trait PriceLookup: Send + Sync {
    fn price_at(&self, schedule: &PriceSchedule, period: YearMonth) -> Result<Decimal, PricingError>;
}

/// Picks the latest entry whose effective month is not after the target
///
/// When two entries take effect on the same date the one listed last wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestEffectivePrice;

impl PriceLookup for LatestEffectivePrice {
    fn price_at(&self, schedule: &PriceSchedule, period: YearMonth) -> Result<Decimal, PricingError> {
        schedule
            .entries
            .iter()
            .filter(|entry| entry.effective_month() <= period)
            .max_by_key(|entry| entry.effective_from)
            .map(|entry| entry.amount)
            .ok_or(PricingError::PriceNotFound(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_entry_mid_month_applies_to_whole_month() {
        let schedule = PriceSchedule::starting(date(2024, 6, 15), dec!(800));
        assert_eq!(LatestEffectivePrice.price_at(&schedule, ym(2024, 6)), Ok(dec!(800)));
    }

    #[test]
    fn test_before_first_entry_is_not_found() {
        let schedule = PriceSchedule::starting(date(2024, 6, 1), dec!(800));
        assert_eq!(
            LatestEffectivePrice.price_at(&schedule, ym(2024, 5)),
            Err(PricingError::PriceNotFound(ym(2024, 5)))
        );
    }

    #[test]
    fn test_latest_change_wins_regardless_of_order() {
        let schedule = PriceSchedule::starting(date(2025, 1, 1), dec!(820))
            .with_change(date(2024, 1, 1), dec!(800));

        assert_eq!(LatestEffectivePrice.price_at(&schedule, ym(2024, 12)), Ok(dec!(800)));
        assert_eq!(LatestEffectivePrice.price_at(&schedule, ym(2025, 1)), Ok(dec!(820)));
    }

    #[test]
    fn test_same_date_last_listed_wins() {
        let schedule = PriceSchedule::starting(date(2024, 1, 1), dec!(800))
            .with_change(date(2024, 1, 1), dec!(810));
        assert_eq!(LatestEffectivePrice.price_at(&schedule, ym(2024, 3)), Ok(dec!(810)));
    }

    #[test]
    fn test_empty_schedule_is_not_found() {
        let schedule = PriceSchedule::default();
        assert!(LatestEffectivePrice.price_at(&schedule, ym(2024, 1)).is_err());
    }
}
