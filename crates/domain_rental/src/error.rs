//! Rental domain errors

use thiserror::Error;

use core_kernel::{PortError, TemporalError};

/// Errors that can occur in the rental domain
#[derive(Debug, Error)]
pub enum RentalError {
    /// A lease date is malformed or the period is inverted
    #[error("Invalid lease date: {0}")]
    InvalidLeaseDate(#[from] TemporalError),

    /// A price schedule entry is negative
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// A required field is missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<RentalError> for PortError {
    fn from(err: RentalError) -> Self {
        PortError::validation(err.to_string())
    }
}
