//! Receipt domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::YearMonth;
use domain_rental::PricingError;

/// Errors that can occur while building or editing a ledger
///
/// Edit rejections (`NegativeAmount`, `UnknownField`, `AmountOutOfRange`,
/// index errors) leave the ledger untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// The lease start or end date is not a valid `dd/mm/yyyy` date
    #[error("Invalid lease date: {0}")]
    InvalidLeaseDate(String),

    /// No price is effective for the month
    #[error("No price found for {0}")]
    PriceNotFound(YearMonth),

    /// A payment edit carried a negative amount
    #[error("Negative amount not allowed: {0}")]
    NegativeAmount(Decimal),

    /// An edit named a field that cannot be edited
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A total or balance of the month (ordinal) left the supported range
    #[error("Amounts of month {0} are out of range")]
    AmountOutOfRange(u32),

    /// Month index outside 0..12
    #[error("Month index {0} is out of range")]
    MonthOutOfRange(usize),

    /// Line index past the month's last line
    #[error("Line {line} does not exist in month index {month}")]
    LineOutOfRange {
        month: usize,
        line: usize,
    },
}

impl ReceiptError {
    /// Translation key of the user-facing message
    pub fn translation_key(&self) -> &'static str {
        match self {
            ReceiptError::InvalidLeaseDate(_) => "receipt.error.invalid_lease_date",
            ReceiptError::PriceNotFound(_) => "receipt.error.price_not_found",
            ReceiptError::NegativeAmount(_) => "receipt.error.negative_amount",
            ReceiptError::UnknownField(_) => "receipt.error.unknown_field",
            ReceiptError::AmountOutOfRange(_) => "receipt.error.amount_out_of_range",
            ReceiptError::MonthOutOfRange(_) => "receipt.error.month_out_of_range",
            ReceiptError::LineOutOfRange { .. } => "receipt.error.line_out_of_range",
        }
    }

    /// Returns true for errors raised by an edit rather than by construction
    pub fn is_rejected_edit(&self) -> bool {
        !matches!(
            self,
            ReceiptError::InvalidLeaseDate(_) | ReceiptError::PriceNotFound(_)
        )
    }
}

impl From<PricingError> for ReceiptError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::PriceNotFound(period) => ReceiptError::PriceNotFound(period),
        }
    }
}
