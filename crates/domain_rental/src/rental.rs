//! Rentals and their lease terms

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, LeasePeriod, PropertyId, RentalId, TenantId};
use crate::error::RentalError;
use crate::pricing::PriceSchedule;

/// The lease terms a receipt ledger is computed from
///
/// Dates stay in their textual `dd/mm/yyyy` form as stored; they are parsed
/// on demand by [`RentalTerms::lease_period`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalTerms {
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub rent_schedule: PriceSchedule,
    pub charges_schedule: PriceSchedule,
}

impl RentalTerms {
    pub fn new(start_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: None,
            rent_schedule: PriceSchedule::default(),
            charges_schedule: PriceSchedule::default(),
        }
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_rent(mut self, schedule: PriceSchedule) -> Self {
        self.rent_schedule = schedule;
        self
    }

    pub fn with_charges(mut self, schedule: PriceSchedule) -> Self {
        self.charges_schedule = schedule;
        self
    }

    /// Parses the lease dates
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidLeaseDate` when either date is not a
    /// valid `dd/mm/yyyy` date or the end precedes the start.
    pub fn lease_period(&self) -> Result<LeasePeriod, RentalError> {
        Ok(LeasePeriod::parse(&self.start_date, self.end_date.as_deref())?)
    }

    pub fn validate(&self) -> Result<(), RentalError> {
        self.lease_period()?;
        for (name, schedule) in [("rent", &self.rent_schedule), ("charges", &self.charges_schedule)] {
            if let Some(entry) = schedule.first_negative() {
                return Err(RentalError::InvalidPrice(format!(
                    "{} of {} effective {} is negative",
                    name, entry.amount, entry.effective_from
                )));
            }
        }
        Ok(())
    }
}

/// A tenant's occupation of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub property_id: PropertyId,
    pub tenant_id: TenantId,
    #[serde(flatten)]
    pub terms: RentalTerms,
    /// Security deposit held for the lease
    pub deposit: Decimal,
    pub currency: Currency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(property_id: PropertyId, tenant_id: TenantId, terms: RentalTerms) -> Self {
        let now = Utc::now();
        Self {
            id: RentalId::new_v7(),
            property_id,
            tenant_id,
            terms,
            deposit: Decimal::ZERO,
            currency: Currency::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_deposit(mut self, deposit: Decimal) -> Self {
        self.deposit = deposit;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn terms(&self) -> &RentalTerms {
        &self.terms
    }

    pub fn validate(&self) -> Result<(), RentalError> {
        self.terms.validate()?;
        if self.deposit.is_sign_negative() && !self.deposit.is_zero() {
            return Err(RentalError::InvalidPrice(format!("deposit {} is negative", self.deposit)));
        }
        Ok(())
    }
}
