//! Ledger data model
//!
//! A [`Ledger`] is exactly twelve [`MonthLedger`]s, January first. Each month
//! owns a first payment line that can never be removed plus any number of
//! additional lines, so "every month has at least one line" holds by
//! construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::RentalId;

/// Result of a payment line
///
/// `Unset` means no payment has been recorded on the line yet, so no balance
/// exists. It is carried forward as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "amount", rename_all = "snake_case")]
pub enum Balance {
    #[default]
    Unset,
    Computed(Decimal),
}

impl Balance {
    /// Balance after `payment` against `total`, if a payment exists
    ///
    /// `None` when the difference leaves the `Decimal` range.
    pub fn after_payment(total: Decimal, payment: Option<Decimal>) -> Option<Self> {
        match payment {
            Some(paid) => total.checked_sub(paid).map(Balance::Computed),
            None => Some(Balance::Unset),
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Balance::Unset => None,
            Balance::Computed(amount) => Some(*amount),
        }
    }

    /// The value carried into the next line
    pub fn carried(&self) -> Decimal {
        self.amount().unwrap_or(Decimal::ZERO)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Balance::Unset)
    }
}

/// One recorded or pending payment within a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLine {
    /// Balance carried from the preceding line
    pub previous_balance: Decimal,
    /// Amount due on this line
    pub total: Decimal,
    pub payment: Option<Decimal>,
    /// Payment date as typed by the user
    pub date: String,
    pub commentary: String,
    pub balance: Balance,
    /// False only for the line created with the month
    pub is_additional_line: bool,
}

impl PaymentLine {
    /// The automatic first line of a month
    pub(crate) fn opening(total: Decimal) -> Self {
        Self {
            previous_balance: Decimal::ZERO,
            total,
            payment: None,
            date: String::new(),
            commentary: String::new(),
            balance: Balance::Unset,
            is_additional_line: false,
        }
    }

    /// A user-appended line continuing from `carried`
    pub(crate) fn additional(carried: Decimal) -> Self {
        Self {
            previous_balance: carried,
            total: carried,
            payment: None,
            date: String::new(),
            commentary: String::new(),
            balance: Balance::Unset,
            is_additional_line: true,
        }
    }
}

/// One calendar month of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLedger {
    /// Month ordinal, 1 = January
    pub month: u32,
    /// Display label supplied by the caller
    pub label: String,
    /// The lease starts in this month
    pub is_rent_changed: bool,
    /// The month ordinal is greater than the lease start month
    pub is_after_rent_period: bool,
    pub rent: Decimal,
    pub charges: Decimal,
    /// Month-level fees, charged with the rent on the first line
    pub miscellaneous_fees: Decimal,
    pub(crate) first_line: PaymentLine,
    pub(crate) additional_lines: Vec<PaymentLine>,
}

impl MonthLedger {
    pub(crate) fn new(
        month: u32,
        label: String,
        is_rent_changed: bool,
        is_after_rent_period: bool,
        rent: Decimal,
        charges: Decimal,
    ) -> Self {
        Self {
            month,
            label,
            is_rent_changed,
            is_after_rent_period,
            rent,
            charges,
            miscellaneous_fees: Decimal::ZERO,
            first_line: PaymentLine::opening(rent.saturating_add(charges)),
            additional_lines: Vec::new(),
        }
    }

    /// Rent, charges and fees due for the month, `None` on overflow
    pub fn dues(&self) -> Option<Decimal> {
        self.rent.checked_add(self.charges)?.checked_add(self.miscellaneous_fees)
    }

    /// Payment lines in chronological order
    pub fn lines(&self) -> impl Iterator<Item = &PaymentLine> {
        std::iter::once(&self.first_line).chain(self.additional_lines.iter())
    }

    pub(crate) fn lines_mut(&mut self) -> impl Iterator<Item = &mut PaymentLine> {
        std::iter::once(&mut self.first_line).chain(self.additional_lines.iter_mut())
    }

    pub fn line(&self, index: usize) -> Option<&PaymentLine> {
        match index {
            0 => Some(&self.first_line),
            n => self.additional_lines.get(n - 1),
        }
    }

    pub(crate) fn line_mut(&mut self, index: usize) -> Option<&mut PaymentLine> {
        match index {
            0 => Some(&mut self.first_line),
            n => self.additional_lines.get_mut(n - 1),
        }
    }

    pub fn line_count(&self) -> usize {
        1 + self.additional_lines.len()
    }

    pub fn first_line(&self) -> &PaymentLine {
        &self.first_line
    }

    pub fn last_line(&self) -> &PaymentLine {
        self.additional_lines.last().unwrap_or(&self.first_line)
    }
}

/// The twelve-month receipt ledger of one rental for one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub rental_id: RentalId,
    pub year: i32,
    pub(crate) months: [MonthLedger; 12],
}

impl Ledger {
    pub(crate) fn new(rental_id: RentalId, year: i32, months: [MonthLedger; 12]) -> Self {
        Self { rental_id, year, months }
    }

    /// Months, January first
    pub fn months(&self) -> &[MonthLedger; 12] {
        &self.months
    }

    /// Month by zero-based index (0 = January)
    pub fn month(&self, index: usize) -> Option<&MonthLedger> {
        self.months.get(index)
    }

    /// Balance of the last line of December
    pub fn closing_balance(&self) -> Balance {
        self.months[11].last_line().balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn month_with_lines() -> MonthLedger {
        let mut month = MonthLedger::new(3, "March".to_string(), false, false, dec!(800), dec!(50));
        month.additional_lines.push(PaymentLine::additional(dec!(120)));
        month
    }

    #[test]
    fn test_balance_after_payment() {
        assert_eq!(Balance::after_payment(dec!(850), Some(dec!(850))), Some(Balance::Computed(dec!(0))));
        assert_eq!(Balance::after_payment(dec!(850), None), Some(Balance::Unset));
        assert_eq!(Balance::after_payment(Decimal::MIN, Some(dec!(1))), None);
    }

    #[test]
    fn test_dues_overflow_is_none() {
        let mut month = month_with_lines();
        assert_eq!(month.dues(), Some(dec!(850)));
        month.miscellaneous_fees = Decimal::MAX;
        assert_eq!(month.dues(), None);
    }

    #[test]
    fn test_unset_balance_carries_zero() {
        assert_eq!(Balance::Unset.carried(), Decimal::ZERO);
        assert_eq!(Balance::Computed(dec!(-20)).carried(), dec!(-20));
    }

    #[test]
    fn test_line_indexing() {
        let month = month_with_lines();
        assert_eq!(month.line_count(), 2);
        assert!(!month.line(0).unwrap().is_additional_line);
        assert!(month.line(1).unwrap().is_additional_line);
        assert!(month.line(2).is_none());
        assert_eq!(month.last_line().previous_balance, dec!(120));
    }

    #[test]
    fn test_balance_json_shape() {
        let json = serde_json::to_value(Balance::Unset).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "unset" }));
    }
}
