//! Property-Based Test Generators
//!
//! Proptest strategies for amounts, raw form input and ledger edits.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_receipt::LedgerEdit;

/// Non-negative amounts with two decimal places, up to 100 000.00
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strictly negative amounts with two decimal places
pub fn negative_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Zero-based month index
pub fn month_index_strategy() -> impl Strategy<Value = usize> {
    0usize..12
}

/// Lease start month ordinal
pub fn start_month_strategy() -> impl Strategy<Value = u32> {
    1u32..=12
}

/// Payment input as a user might type it, never negative
pub fn payment_input_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => amount_strategy().prop_map(|a| a.to_string()),
        1 => amount_strategy().prop_map(|a| a.to_string().replace('.', ",")),
        1 => Just(String::new()),
        1 => Just("abc".to_string()),
    ]
}

/// Edits that the editor always accepts on a ledger with one line per month
pub fn accepted_edit_strategy() -> impl Strategy<Value = (usize, LedgerEdit)> {
    let edit = prop_oneof![
        3 => payment_input_strategy().prop_map(|value| LedgerEdit::SetPayment { line: 0, value }),
        1 => amount_strategy().prop_map(|fees| LedgerEdit::SetMiscFees(fees.to_string())),
        1 => "[a-z ]{0,12}".prop_map(|text| LedgerEdit::SetCommentary { line: 0, text }),
        1 => Just(LedgerEdit::SetDate { line: 0, text: "05/03/2024".to_string() }),
    ];
    (month_index_strategy(), edit)
}

/// A sequence of accepted edits
pub fn edit_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<(usize, LedgerEdit)>> {
    prop::collection::vec(accepted_edit_strategy(), 0..max_len)
}
