//! Rentable properties

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::PropertyId;
use crate::error::RentalError;

/// Kind of rentable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    #[default]
    Apartment,
    House,
    Studio,
    Parking,
    Commercial,
    Other,
}

/// A property managed by the landlord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    /// Short name shown in lists
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub kind: PropertyKind,
    /// Living surface in square meters
    pub surface: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn new(name: impl Into<String>, address: impl Into<String>, kind: PropertyKind) -> Self {
        let now = Utc::now();
        Self {
            id: PropertyId::new_v7(),
            name: name.into(),
            address: address.into(),
            postal_code: String::new(),
            city: String::new(),
            kind,
            surface: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_city(mut self, postal_code: impl Into<String>, city: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self.city = city.into();
        self
    }

    pub fn with_surface(mut self, surface: Decimal) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Checks the fields a store requires before accepting the record
    pub fn validate(&self) -> Result<(), RentalError> {
        if self.name.trim().is_empty() {
            return Err(RentalError::Validation("property name is required".to_string()));
        }
        if self.address.trim().is_empty() {
            return Err(RentalError::Validation("property address is required".to_string()));
        }
        if let Some(surface) = self.surface {
            if surface <= Decimal::ZERO {
                return Err(RentalError::Validation("surface must be positive".to_string()));
            }
        }
        Ok(())
    }
}
