//! Property, tenant and rental DTOs
//!
//! Responses are the domain records themselves; requests carry only the
//! editable fields.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use core_kernel::{Currency, PropertyId, TenantId};
use domain_rental::{PriceSchedule, Property, PropertyKind, Rental, RentalTerms, Tenant};

#[derive(Debug, Deserialize, Validate)]
pub struct PropertyRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub kind: PropertyKind,
    pub surface: Option<Decimal>,
}

impl PropertyRequest {
    pub fn into_property(self) -> Property {
        let mut property = Property::new(self.name, self.address, self.kind)
            .with_city(self.postal_code, self.city);
        property.surface = self.surface;
        property
    }

    /// Overwrites the editable fields of `property`
    pub fn apply_to(self, property: &mut Property) {
        property.name = self.name;
        property.address = self.address;
        property.postal_code = self.postal_code;
        property.city = self.city;
        property.kind = self.kind;
        property.surface = self.surface;
        property.updated_at = Utc::now();
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct TenantRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

impl TenantRequest {
    pub fn into_tenant(self) -> Tenant {
        let mut tenant = Tenant::new(self.first_name, self.last_name);
        tenant.email = self.email;
        tenant.phone = self.phone;
        tenant
    }

    pub fn apply_to(self, tenant: &mut Tenant) {
        tenant.first_name = self.first_name;
        tenant.last_name = self.last_name;
        tenant.email = self.email;
        tenant.phone = self.phone;
        tenant.updated_at = Utc::now();
    }
}

/// Lease dates use `dd/mm/yyyy`
#[derive(Debug, Deserialize, Validate)]
pub struct RentalRequest {
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    #[validate(length(equal = 10))]
    pub start_date: String,
    pub end_date: Option<String>,
    pub rent_schedule: PriceSchedule,
    pub charges_schedule: PriceSchedule,
    #[serde(default)]
    pub deposit: Decimal,
    #[serde(default)]
    pub currency: Currency,
}

impl RentalRequest {
    fn terms(&self) -> RentalTerms {
        RentalTerms {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone().filter(|d| !d.trim().is_empty()),
            rent_schedule: self.rent_schedule.clone(),
            charges_schedule: self.charges_schedule.clone(),
        }
    }

    pub fn into_rental(self) -> Rental {
        Rental::new(
            PropertyId::from_uuid(self.property_id),
            TenantId::from_uuid(self.tenant_id),
            self.terms(),
        )
        .with_deposit(self.deposit)
        .with_currency(self.currency)
    }

    /// Overwrites terms, deposit and currency; property and tenant stay
    pub fn apply_to(self, rental: &mut Rental) {
        rental.terms = self.terms();
        rental.deposit = self.deposit;
        rental.currency = self.currency;
        rental.updated_at = Utc::now();
    }
}
