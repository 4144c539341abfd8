//! Request handlers

pub mod health;
pub mod properties;
pub mod tenants;
pub mod rentals;
pub mod ledgers;
