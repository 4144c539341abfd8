//! Request and response bodies

pub mod records;
pub mod ledgers;
