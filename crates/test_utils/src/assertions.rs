//! Custom Test Assertions
//!
//! Ledger checks that give more meaningful failure messages than comparing
//! whole ledgers.

use rust_decimal::Decimal;

use domain_receipt::{Balance, Ledger};

/// Asserts that every derived value of `ledger` follows the propagation rules
///
/// # Panics
///
/// Panics naming the first month and line whose previous balance, total or
/// balance disagrees with its predecessors.
pub fn assert_ledger_consistent(ledger: &Ledger) {
    let mut carried = Decimal::ZERO;
    for (month_index, month) in ledger.months().iter().enumerate() {
        assert_eq!(month.month as usize, month_index + 1, "month ordinal out of order");
        assert!(month.line_count() >= 1, "month {} has no lines", month.month);
        assert!(!month.first_line().is_additional_line, "month {} lost its first line", month.month);

        for (line_index, line) in month.lines().enumerate() {
            assert_eq!(
                line.previous_balance, carried,
                "month {} line {}: previous balance {} expected {}",
                month.month, line_index, line.previous_balance, carried
            );
            let expected_total = match line_index {
                0 => month.dues().and_then(|dues| dues.checked_add(carried)),
                _ => Some(carried),
            };
            let expected_total = expected_total
                .unwrap_or_else(|| panic!("month {} line {}: total out of range", month.month, line_index));
            assert_eq!(
                line.total, expected_total,
                "month {} line {}: total {} expected {}",
                month.month, line_index, line.total, expected_total
            );
            assert_eq!(
                line.balance,
                Balance::after_payment(line.total, line.payment)
                    .unwrap_or_else(|| panic!("month {} line {}: balance out of range", month.month, line_index)),
                "month {} line {}: balance does not match payment",
                month.month, line_index
            );
            carried = line.balance.carried();
        }
    }
}

/// Asserts that the months before `month_index` are identical in both ledgers
pub fn assert_months_unchanged_before(before: &Ledger, after: &Ledger, month_index: usize) {
    for index in 0..month_index {
        assert_eq!(
            before.months()[index], after.months()[index],
            "month index {} changed after an edit to month index {}",
            index, month_index
        );
    }
}

/// Asserts the balance of one line
pub fn assert_balance(ledger: &Ledger, month_index: usize, line: usize, expected: Balance) {
    let actual = ledger
        .month(month_index)
        .and_then(|m| m.line(line))
        .map(|l| l.balance);
    assert_eq!(
        actual,
        Some(expected),
        "balance of month index {} line {}",
        month_index, line
    );
}
