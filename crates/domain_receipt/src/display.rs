//! Display rows
//!
//! Flattened, string-valued views of a ledger for rendering. Amounts are
//! two-decimal strings; values that do not exist yet render as `""`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::amount::format_amount;

use crate::ledger::{Ledger, MonthLedger, PaymentLine};

/// One payment line as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRow {
    pub index: usize,
    pub previous_balance: String,
    pub total: String,
    pub payment: String,
    pub date: String,
    pub commentary: String,
    pub balance: String,
    /// Only additional lines can be deleted
    pub can_delete: bool,
}

impl LineRow {
    pub fn from_line(index: usize, line: &PaymentLine) -> Self {
        Self {
            index,
            previous_balance: format_amount(line.previous_balance),
            total: format_amount(line.total),
            payment: line.payment.map(format_amount).unwrap_or_default(),
            date: line.date.clone(),
            commentary: line.commentary.clone(),
            balance: line.balance.amount().map(format_amount).unwrap_or_default(),
            can_delete: line.is_additional_line,
        }
    }
}

/// One month as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRow {
    pub month: u32,
    pub label: String,
    pub is_rent_changed: bool,
    pub is_after_rent_period: bool,
    pub rent: String,
    pub charges: String,
    pub miscellaneous_fees: String,
    pub lines: Vec<LineRow>,
}

impl MonthRow {
    /// Rent and charges show as `"0.00"` for months flagged after the rent
    /// period; the stored amounts are not affected.
    pub fn from_month(month: &MonthLedger) -> Self {
        let (rent, charges) = if month.is_after_rent_period {
            (format_amount(Decimal::ZERO), format_amount(Decimal::ZERO))
        } else {
            (format_amount(month.rent), format_amount(month.charges))
        };

        Self {
            month: month.month,
            label: month.label.clone(),
            is_rent_changed: month.is_rent_changed,
            is_after_rent_period: month.is_after_rent_period,
            rent,
            charges,
            miscellaneous_fees: format_amount(month.miscellaneous_fees),
            lines: month
                .lines()
                .enumerate()
                .map(|(index, line)| LineRow::from_line(index, line))
                .collect(),
        }
    }

    pub fn from_ledger(ledger: &Ledger) -> Vec<Self> {
        ledger.months().iter().map(Self::from_month).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_after_rent_period_hides_prices() {
        let month = MonthLedger::new(7, "July".to_string(), false, true, dec!(800), dec!(50));
        let row = MonthRow::from_month(&month);
        assert_eq!(row.rent, "0.00");
        assert_eq!(row.charges, "0.00");
        assert_eq!(row.lines[0].total, "850.00");
    }

    #[test]
    fn test_unset_values_render_empty() {
        let month = MonthLedger::new(1, "January".to_string(), true, false, dec!(800), dec!(50));
        let row = MonthRow::from_month(&month);
        assert_eq!(row.rent, "800.00");
        assert_eq!(row.lines[0].payment, "");
        assert_eq!(row.lines[0].balance, "");
        assert!(!row.lines[0].can_delete);
    }
}
