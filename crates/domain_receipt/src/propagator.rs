//! Balance propagation
//!
//! Derived values of every line are recomputed from scratch, months in
//! January→December order and lines in list order:
//!
//! - `previous_balance`: balance of the preceding line (the last line of the
//!   previous month for a first line, zero for January's first line); an
//!   unset balance counts as zero
//! - `total`: the month's dues plus `previous_balance` on the first line,
//!   `previous_balance` alone on additional lines
//! - `balance`: `total - payment` when a payment is recorded, else unset
//!
//! Sums that leave the `Decimal` range fail with
//! [`ReceiptError::AmountOutOfRange`] instead of overflowing.

use rust_decimal::Decimal;

use crate::error::ReceiptError;
use crate::ledger::{Balance, Ledger, MonthLedger};

/// Recalculates a whole ledger, returning a new one
///
/// Running it on its own output changes nothing.
pub fn recalculate(ledger: &Ledger) -> Result<Ledger, ReceiptError> {
    let mut next = ledger.clone();
    let mut carried = Decimal::ZERO;
    for month in next.months.iter_mut() {
        carried = recalculate_month(month, carried)?;
    }
    Ok(next)
}

/// Recalculates the lines of one month from the balance carried into it and
/// returns the balance it carries out
fn recalculate_month(month: &mut MonthLedger, opening: Decimal) -> Result<Decimal, ReceiptError> {
    let out_of_range = ReceiptError::AmountOutOfRange(month.month);
    let dues = month.dues().ok_or_else(|| out_of_range.clone())?;
    let mut carried = opening;

    for (index, line) in month.lines_mut().enumerate() {
        line.previous_balance = carried;
        line.total = if index == 0 {
            dues.checked_add(carried).ok_or_else(|| out_of_range.clone())?
        } else {
            carried
        };
        line.balance = Balance::after_payment(line.total, line.payment).ok_or_else(|| out_of_range.clone())?;
        carried = line.balance.carried();
    }

    Ok(carried)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::PaymentLine;
    use core_kernel::RentalId;
    use rust_decimal_macros::dec;

    fn flat_ledger() -> Ledger {
        let months = std::array::from_fn(|i| {
            MonthLedger::new(i as u32 + 1, String::new(), false, false, dec!(800), dec!(50))
        });
        Ledger::new(RentalId::new(), 2024, months)
    }

    #[test]
    fn test_unpaid_year_has_no_balances() {
        let ledger = recalculate(&flat_ledger()).unwrap();
        for month in ledger.months() {
            assert_eq!(month.first_line().previous_balance, Decimal::ZERO);
            assert_eq!(month.first_line().total, dec!(850));
            assert!(month.first_line().balance.is_unset());
        }
    }

    #[test]
    fn test_underpayment_carries_into_next_month() {
        let mut ledger = flat_ledger();
        ledger.months[0].first_line.payment = Some(dec!(800));
        let ledger = recalculate(&ledger).unwrap();

        assert_eq!(ledger.months()[0].first_line().balance, Balance::Computed(dec!(50)));
        assert_eq!(ledger.months()[1].first_line().previous_balance, dec!(50));
        assert_eq!(ledger.months()[1].first_line().total, dec!(900));
    }

    #[test]
    fn test_additional_line_carries_within_month() {
        let mut ledger = flat_ledger();
        ledger.months[2].first_line.payment = Some(dec!(730));
        ledger.months[2].additional_lines.push(PaymentLine::additional(Decimal::ZERO));
        ledger.months[2].additional_lines[0].payment = Some(dec!(120));
        let ledger = recalculate(&ledger).unwrap();

        let march = &ledger.months()[2];
        assert_eq!(march.line(1).unwrap().previous_balance, dec!(120));
        assert_eq!(march.line(1).unwrap().total, dec!(120));
        assert_eq!(march.line(1).unwrap().balance, Balance::Computed(dec!(0)));
        assert_eq!(ledger.months()[3].first_line().previous_balance, dec!(0));
    }

    #[test]
    fn test_fees_are_charged_on_first_line_only() {
        let mut ledger = flat_ledger();
        ledger.months[0].miscellaneous_fees = dec!(30);
        ledger.months[0].additional_lines.push(PaymentLine::additional(Decimal::ZERO));
        let ledger = recalculate(&ledger).unwrap();

        assert_eq!(ledger.months()[0].first_line().total, dec!(880));
        assert_eq!(ledger.months()[0].line(1).unwrap().total, dec!(0));
    }

    #[test]
    fn test_recalculate_is_idempotent() {
        let mut ledger = flat_ledger();
        ledger.months[4].first_line.payment = Some(dec!(100));
        let once = recalculate(&ledger).unwrap();
        assert_eq!(recalculate(&once), Ok(once));
    }

    #[test]
    fn test_overflowing_fees_are_out_of_range() {
        let mut ledger = flat_ledger();
        ledger.months[3].miscellaneous_fees = Decimal::MAX;
        assert_eq!(recalculate(&ledger), Err(ReceiptError::AmountOutOfRange(4)));
    }

    #[test]
    fn test_overflowing_carried_balance_is_out_of_range() {
        let mut ledger = flat_ledger();
        ledger.months[0].first_line.payment = Some(Decimal::MAX);
        ledger.months[1].first_line.payment = Some(Decimal::MAX);
        assert_eq!(recalculate(&ledger), Err(ReceiptError::AmountOutOfRange(2)));
    }
}
