//! Tenants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::TenantId;
use crate::error::RentalError;

/// A person renting a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TenantId::new_v7(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// "First Last", or just the last name when no first name was given
    pub fn display_name(&self) -> String {
        if self.first_name.trim().is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    pub fn validate(&self) -> Result<(), RentalError> {
        if self.last_name.trim().is_empty() {
            return Err(RentalError::Validation("tenant last name is required".to_string()));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(RentalError::Validation(format!("invalid email: {}", email)));
            }
        }
        Ok(())
    }
}
