//! Receipt Domain - Monthly Rent Ledger
//!
//! This crate computes the rent-receipt ledger of one rental for one year:
//! twelve months, January first, each with the rent and charges due and one
//! or more payment lines.
//!
//! # Components
//!
//! - **Builder** ([`build_ledger`]): creates the twelve months from the lease
//!   terms, one automatic payment line per month
//! - **Propagator** ([`recalculate`]): derives previous balance, total and
//!   balance of every line, carrying the trailing balance of a month into
//!   the first line of the next
//! - **Editor** ([`add_payment_line`], [`delete_payment_line`],
//!   [`apply_edit`]): validated edits, each returning a new recalculated
//!   ledger
//! - **Controller** ([`LedgerController`]): the single owner of a ledger
//!   being edited; rejected edits are reported, never thrown
//!
//! # Balance propagation
//!
//! ```text
//!  January                    February
//!  ┌──────────────────────┐   ┌──────────────────────┐
//!  │ line 0  prev 0       │   │ line 0  prev = B1    │
//!  │         total T0     │   │         total ...    │
//!  │         balance B0 ──┼─┐ └──────────────────────┘
//!  │ line 1  prev = B0    │ │            ▲
//!  │         balance B1 ──┼─┼────────────┘
//!  └──────────────────────┘ │
//!                           └─ unset balances carry as 0
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_receipt::{build_ledger, apply_edit, LedgerEdit};
//! use domain_rental::LatestEffectivePrice;
//!
//! let ledger = build_ledger(rental.id, rental.terms(), &labels, 2024, &LatestEffectivePrice)?;
//! let ledger = apply_edit(&ledger, 0, LedgerEdit::SetPayment { line: 0, value: "850".into() })?;
//! ```

pub mod ledger;
pub mod builder;
pub mod propagator;
pub mod editor;
pub mod controller;
pub mod display;
pub mod receipt;
pub mod ports;
pub mod error;

pub use ledger::{Balance, Ledger, MonthLedger, PaymentLine};
pub use builder::build_ledger;
pub use propagator::recalculate;
pub use editor::{add_payment_line, apply_edit, delete_payment_line, LedgerEdit};
pub use controller::{EditOutcome, LedgerController, LogNotifier, Notice, Notifier};
pub use display::{LineRow, MonthRow};
pub use receipt::Receipt;
pub use ports::{InMemoryReceiptStore, ReceiptStorePort};
pub use error::ReceiptError;
