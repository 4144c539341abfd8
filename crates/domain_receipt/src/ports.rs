//! Receipt Store Port
//!
//! Persistence for ledger snapshots. Nothing in the ledger core writes
//! through it; callers that want to keep a copy of a ledger call it
//! explicitly.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError, ReceiptId, RentalId};

use crate::receipt::Receipt;

/// Port for stored receipts
#[async_trait]
pub trait ReceiptStorePort: DomainPort {
    /// Stores a new receipt; fails with `Conflict` if one already exists for
    /// the same rental and year
    async fn add_receipt(&self, receipt: Receipt) -> Result<Receipt, PortError>;

    /// Replaces a stored receipt; fails with `NotFound` if it was never added
    async fn update_receipt(&self, receipt: Receipt) -> Result<Receipt, PortError>;

    async fn find_receipt(&self, rental_id: RentalId, year: i32) -> Result<Option<Receipt>, PortError>;
}

/// In-memory receipt store
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryReceiptStore {}

#[async_trait]
impl ReceiptStorePort for InMemoryReceiptStore {
    #[instrument(skip(self, receipt), fields(receipt_id = %receipt.id, year = receipt.year))]
    async fn add_receipt(&self, receipt: Receipt) -> Result<Receipt, PortError> {
        let mut receipts = self.receipts.write().await;
        let duplicate = receipts
            .values()
            .any(|r| r.rental_id == receipt.rental_id && r.year == receipt.year);
        if duplicate || receipts.contains_key(&receipt.id) {
            return Err(PortError::conflict(format!(
                "Receipt for {} in {} already exists",
                receipt.rental_id, receipt.year
            )));
        }
        receipts.insert(receipt.id, receipt.clone());
        debug!("receipt stored");
        Ok(receipt)
    }

    #[instrument(skip(self, receipt), fields(receipt_id = %receipt.id))]
    async fn update_receipt(&self, receipt: Receipt) -> Result<Receipt, PortError> {
        let mut receipts = self.receipts.write().await;
        let stored = receipts
            .get_mut(&receipt.id)
            .ok_or_else(|| PortError::not_found("Receipt", receipt.id))?;
        *stored = receipt.clone();
        debug!("receipt updated");
        Ok(receipt)
    }

    async fn find_receipt(&self, rental_id: RentalId, year: i32) -> Result<Option<Receipt>, PortError> {
        let receipts = self.receipts.read().await;
        Ok(receipts
            .values()
            .find(|r| r.rental_id == rental_id && r.year == year)
            .cloned())
    }
}
