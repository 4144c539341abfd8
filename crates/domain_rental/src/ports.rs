//! Rental Store Port
//!
//! Records live in an external document store. The domain only sees this
//! trait; the HTTP layer receives an `Arc<dyn RentalStorePort>` at startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_rental::{RentalStorePort, InMemoryRentalStore};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn RentalStorePort> = Arc::new(InMemoryRentalStore::new());
//! let rental = store.get_rental_by_id(rental_id).await?;
//! let terms = rental.terms();
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError, PropertyId, RentalId, TenantId};

use crate::property::Property;
use crate::rental::Rental;
use crate::tenant::Tenant;

/// Port for the rental document store
///
/// Lookups by id fail with `PortError::NotFound`. Create and update validate
/// the record first and fail with `PortError::Validation`.
#[async_trait]
pub trait RentalStorePort: DomainPort {
    // ------------------------------------------------------------------
    // Rentals
    // ------------------------------------------------------------------

    async fn get_rental_by_id(&self, id: RentalId) -> Result<Rental, PortError>;

    async fn list_rentals(&self) -> Result<Vec<Rental>, PortError>;

    /// Stores a new rental; its property and tenant must already exist
    async fn create_rental(&self, rental: Rental) -> Result<Rental, PortError>;

    async fn update_rental(&self, rental: Rental) -> Result<Rental, PortError>;

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    async fn get_property(&self, id: PropertyId) -> Result<Property, PortError>;

    async fn list_properties(&self) -> Result<Vec<Property>, PortError>;

    async fn create_property(&self, property: Property) -> Result<Property, PortError>;

    async fn update_property(&self, property: Property) -> Result<Property, PortError>;

    // ------------------------------------------------------------------
    // Tenants
    // ------------------------------------------------------------------

    async fn get_tenant(&self, id: TenantId) -> Result<Tenant, PortError>;

    async fn list_tenants(&self) -> Result<Vec<Tenant>, PortError>;

    async fn create_tenant(&self, tenant: Tenant) -> Result<Tenant, PortError>;

    async fn update_tenant(&self, tenant: Tenant) -> Result<Tenant, PortError>;
}
