//! Payment-line editing
//!
//! Every operation takes the current ledger by reference and returns a new,
//! recalculated ledger. On error nothing is returned, so the caller's ledger
//! is unchanged.

use rust_decimal::Decimal;

use core_kernel::amount::{parse_lenient, parse_non_negative, AmountError};

use crate::error::ReceiptError;
use crate::ledger::{Ledger, MonthLedger, PaymentLine};
use crate::propagator::recalculate;

/// An edit to one month of a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEdit {
    /// Month-level fees; non-numeric input counts as zero
    SetMiscFees(String),
    /// Payment of a line; blank clears it, non-numeric counts as zero,
    /// negative amounts are rejected
    SetPayment { line: usize, value: String },
    SetCommentary { line: usize, text: String },
    SetDate { line: usize, text: String },
}

impl LedgerEdit {
    /// Maps a form field name to an edit
    ///
    /// Accepted names are `miscellaneousFees`, `payment`, `commentary` and
    /// `date`. `line` is ignored for `miscellaneousFees`.
    pub fn from_field(field: &str, value: impl Into<String>, line: usize) -> Result<Self, ReceiptError> {
        let value = value.into();
        match field {
            "miscellaneousFees" => Ok(LedgerEdit::SetMiscFees(value)),
            "payment" => Ok(LedgerEdit::SetPayment { line, value }),
            "commentary" => Ok(LedgerEdit::SetCommentary { line, text: value }),
            "date" => Ok(LedgerEdit::SetDate { line, text: value }),
            other => Err(ReceiptError::UnknownField(other.to_string())),
        }
    }

    /// Line the edit targets, if it is a line-level edit
    pub fn line(&self) -> Option<usize> {
        match self {
            LedgerEdit::SetMiscFees(_) => None,
            LedgerEdit::SetPayment { line, .. }
            | LedgerEdit::SetCommentary { line, .. }
            | LedgerEdit::SetDate { line, .. } => Some(*line),
        }
    }
}

/// Reads a payment amount
fn parse_payment(value: &str) -> Result<Option<Decimal>, ReceiptError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    match parse_non_negative(value) {
        Ok(amount) => Ok(Some(amount)),
        Err(AmountError::Negative(amount)) => Err(ReceiptError::NegativeAmount(amount)),
        Err(AmountError::InvalidAmount(_)) => Ok(Some(Decimal::ZERO)),
    }
}

fn month_mut(ledger: &mut Ledger, month_index: usize) -> Result<&mut MonthLedger, ReceiptError> {
    ledger
        .months
        .get_mut(month_index)
        .ok_or(ReceiptError::MonthOutOfRange(month_index))
}

fn line_mut(month: &mut MonthLedger, month_index: usize, line: usize) -> Result<&mut PaymentLine, ReceiptError> {
    month
        .line_mut(line)
        .ok_or(ReceiptError::LineOutOfRange { month: month_index, line })
}

/// Appends an additional payment line to a month
///
/// The new line starts from the balance of the month's current last line.
pub fn add_payment_line(ledger: &Ledger, month_index: usize) -> Result<Ledger, ReceiptError> {
    let mut next = ledger.clone();
    let month = month_mut(&mut next, month_index)?;
    let carried = month.last_line().balance.carried();
    month.additional_lines.push(PaymentLine::additional(carried));
    recalculate(&next)
}

/// Removes an additional payment line
///
/// Removing a month's first line is a no-op: the ledger comes back
/// unchanged.
pub fn delete_payment_line(ledger: &Ledger, month_index: usize, line_index: usize) -> Result<Ledger, ReceiptError> {
    let mut next = ledger.clone();
    let month = month_mut(&mut next, month_index)?;
    if month.line(line_index).is_none() {
        return Err(ReceiptError::LineOutOfRange { month: month_index, line: line_index });
    }
    if line_index == 0 {
        return Ok(ledger.clone());
    }
    month.additional_lines.remove(line_index - 1);
    recalculate(&next)
}

/// Applies a validated edit to one month
pub fn apply_edit(ledger: &Ledger, month_index: usize, edit: LedgerEdit) -> Result<Ledger, ReceiptError> {
    let mut next = ledger.clone();
    let month = month_mut(&mut next, month_index)?;

    match edit {
        LedgerEdit::SetMiscFees(value) => {
            month.miscellaneous_fees = parse_lenient(&value);
        }
        LedgerEdit::SetPayment { line, value } => {
            let payment = parse_payment(&value)?;
            line_mut(month, month_index, line)?.payment = payment;
        }
        LedgerEdit::SetCommentary { line, text } => {
            line_mut(month, month_index, line)?.commentary = text;
        }
        LedgerEdit::SetDate { line, text } => {
            line_mut(month, month_index, line)?.date = text;
        }
    }

    recalculate(&next)
}
