//! Receipt records
//!
//! A [`Receipt`] is a stored snapshot of a ledger. Ledgers are rebuilt from
//! the lease terms on every open; snapshots are only written when a caller
//! asks a [`ReceiptStorePort`](crate::ports::ReceiptStorePort) to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ReceiptId, RentalId};

use crate::ledger::{Balance, Ledger, MonthLedger};

/// Snapshot of one rental's ledger for one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: ReceiptId,
    pub rental_id: RentalId,
    pub year: i32,
    pub months: Vec<MonthLedger>,
    pub closing_balance: Balance,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Receipt {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let now = Utc::now();
        Self {
            id: ReceiptId::new(),
            rental_id: ledger.rental_id,
            year: ledger.year,
            months: ledger.months().to_vec(),
            closing_balance: ledger.closing_balance(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the snapshot with the current state of `ledger`, keeping the
    /// receipt id and creation time
    pub fn refresh(&mut self, ledger: &Ledger) {
        self.months = ledger.months().to_vec();
        self.closing_balance = ledger.closing_balance();
        self.updated_at = Utc::now();
    }
}
