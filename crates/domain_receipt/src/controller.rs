//! Ledger ownership and edit reporting
//!
//! A [`LedgerController`] holds the one ledger a user is editing. Mutating
//! methods take `&mut self`, so there is never more than one writer. Edits
//! that the editor refuses are reported through the injected [`Notifier`]
//! and come back as [`EditOutcome::Rejected`]; the held ledger is left as it
//! was.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use core_kernel::i18n::month_labels;
use core_kernel::{RentalId, Translator};
use domain_rental::{PriceLookup, RentalTerms};

use crate::builder::build_ledger;
use crate::display::MonthRow;
use crate::editor::{self, LedgerEdit};
use crate::error::ReceiptError;
use crate::ledger::Ledger;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the person editing the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Receives notices raised while editing
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that forwards notices to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => info!(message = %notice.message, "ledger notice"),
            NoticeLevel::Warning => warn!(message = %notice.message, "ledger notice"),
            NoticeLevel::Error => error!(message = %notice.message, "ledger notice"),
        }
    }
}

/// Result of an edit submitted to a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Rejected(ReceiptError),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&ReceiptError> {
        match self {
            EditOutcome::Applied => None,
            EditOutcome::Rejected(err) => Some(err),
        }
    }
}

/// Single owner of a ledger under edit
pub struct LedgerController {
    ledger: Ledger,
    notifier: Arc<dyn Notifier>,
    translator: Arc<dyn Translator>,
}

impl LedgerController {
    pub fn new(ledger: Ledger, notifier: Arc<dyn Notifier>, translator: Arc<dyn Translator>) -> Self {
        Self { ledger, notifier, translator }
    }

    /// Builds the ledger of `year` for a rental, labelling months through
    /// `translator`
    pub fn open(
        rental_id: RentalId,
        terms: &RentalTerms,
        year: i32,
        pricing: &dyn PriceLookup,
        notifier: Arc<dyn Notifier>,
        translator: Arc<dyn Translator>,
    ) -> Result<Self, ReceiptError> {
        let labels = month_labels(translator.as_ref());
        let ledger = build_ledger(rental_id, terms, &labels, year, pricing)?;
        Ok(Self::new(ledger, notifier, translator))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Display rows of the current ledger, January first
    pub fn rows(&self) -> Vec<MonthRow> {
        MonthRow::from_ledger(&self.ledger)
    }

    pub fn add_payment_line(&mut self, month_index: usize) -> EditOutcome {
        let result = editor::add_payment_line(&self.ledger, month_index);
        self.commit(month_index, result)
    }

    pub fn delete_payment_line(&mut self, month_index: usize, line_index: usize) -> EditOutcome {
        let result = editor::delete_payment_line(&self.ledger, month_index, line_index);
        self.commit(month_index, result)
    }

    /// Applies an edit addressed by form field name
    pub fn set_field(&mut self, month_index: usize, field: &str, value: impl Into<String>, line: usize) -> EditOutcome {
        match LedgerEdit::from_field(field, value, line) {
            Ok(edit) => self.apply(month_index, edit),
            Err(err) => self.reject(month_index, err),
        }
    }

    pub fn apply(&mut self, month_index: usize, edit: LedgerEdit) -> EditOutcome {
        let result = editor::apply_edit(&self.ledger, month_index, edit);
        self.commit(month_index, result)
    }

    fn commit(&mut self, month_index: usize, result: Result<Ledger, ReceiptError>) -> EditOutcome {
        match result {
            Ok(ledger) => {
                self.ledger = ledger;
                debug!(rental_id = %self.ledger.rental_id, month_index, "ledger edit applied");
                EditOutcome::Applied
            }
            Err(err) => self.reject(month_index, err),
        }
    }

    fn reject(&self, month_index: usize, err: ReceiptError) -> EditOutcome {
        warn!(
            rental_id = %self.ledger.rental_id,
            month_index,
            error = %err,
            "ledger edit rejected"
        );
        let message = self.translator.translate(err.translation_key());
        self.notifier.notify(Notice::warning(message));
        EditOutcome::Rejected(err)
    }
}

impl fmt::Debug for LedgerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerController")
            .field("rental_id", &self.ledger.rental_id)
            .field("year", &self.ledger.year)
            .finish_non_exhaustive()
    }
}
