//! Core Kernel - Foundational types for the rental ledger
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Decimal amounts with tolerant parsing and two-place display
//! - Lease dates (`dd/mm/yyyy`) and year-month arithmetic
//! - Strongly-typed identifiers
//! - The port error type used by store adapters
//! - A flat key/value translator

pub mod amount;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod i18n;
pub mod error;

pub use amount::{AmountError, Currency};
pub use temporal::{LeasePeriod, TemporalError, YearMonth};
pub use identifiers::{LedgerSessionId, PropertyId, ReceiptId, RentalId, TenantId};
pub use ports::{DomainPort, PortError};
pub use i18n::{FlatTranslator, Translator};
pub use error::CoreError;
