//! Ledger session DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::amount::format_amount;
use core_kernel::{LedgerSessionId, RentalId};
use domain_receipt::{LedgerController, MonthRow};

/// A form edit: `field` is `payment`, `miscellaneousFees`, `commentary` or
/// `date`
#[derive(Debug, Deserialize, Validate)]
pub struct EditRequest {
    #[validate(length(min = 1, max = 64))]
    pub field: String,
    #[serde(default)]
    pub value: String,
    /// Zero-based line index; ignored for `miscellaneousFees`
    #[serde(default)]
    pub line: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerResponse {
    pub session_id: LedgerSessionId,
    pub rental_id: RentalId,
    pub year: i32,
    /// Balance of December's last line, `""` while unset
    pub closing_balance: String,
    pub months: Vec<MonthRow>,
}

impl LedgerResponse {
    pub fn new(session_id: LedgerSessionId, controller: &LedgerController) -> Self {
        let ledger = controller.ledger();
        Self {
            session_id,
            rental_id: ledger.rental_id,
            year: ledger.year,
            closing_balance: ledger
                .closing_balance()
                .amount()
                .map(format_amount)
                .unwrap_or_default(),
            months: controller.rows(),
        }
    }
}
