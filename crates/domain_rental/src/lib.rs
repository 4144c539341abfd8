//! Rental Domain - Properties, Tenants and Lease Terms
//!
//! This crate holds the records a landlord manages and the lease terms the
//! receipt ledger is built from.
//!
//! # Records
//!
//! - **Property**: a rentable unit (apartment, house, parking space, ...)
//! - **Tenant**: the person occupying a property
//! - **Rental**: binds a tenant to a property with lease dates and prices
//!
//! # Pricing
//!
//! Rent and charges are each a [`PriceSchedule`]: a list of amounts with the
//! date they take effect. A [`PriceLookup`] answers "what is due for this
//! month"; [`LatestEffectivePrice`] is the rule used throughout.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rental::{RentalTerms, PriceSchedule, LatestEffectivePrice, PriceLookup};
//!
//! let terms = RentalTerms::new("01/06/2024")
//!     .with_rent(PriceSchedule::starting(start, dec!(800)))
//!     .with_charges(PriceSchedule::starting(start, dec!(50)));
//!
//! let rent = LatestEffectivePrice.price_at(&terms.rent_schedule, june)?;
//! ```

pub mod property;
pub mod tenant;
pub mod rental;
pub mod pricing;
pub mod ports;
pub mod memory;
pub mod error;

pub use property::{Property, PropertyKind};
pub use tenant::Tenant;
pub use rental::{Rental, RentalTerms};
pub use pricing::{LatestEffectivePrice, PriceEntry, PriceLookup, PriceSchedule, PricingError};
pub use ports::RentalStorePort;
pub use memory::InMemoryRentalStore;
pub use error::RentalError;
