//! In-memory implementation of the rental store
//!
//! Backs the test suites and the development server. Records are kept in
//! `tokio::sync::RwLock`-guarded maps; lists are returned in creation order.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError, PropertyId, RentalId, TenantId};

use crate::ports::RentalStorePort;
use crate::property::Property;
use crate::rental::Rental;
use crate::tenant::Tenant;

/// In-memory rental store
#[derive(Debug, Default, Clone)]
pub struct InMemoryRentalStore {
    properties: Arc<RwLock<HashMap<PropertyId, Property>>>,
    tenants: Arc<RwLock<HashMap<TenantId, Tenant>>>,
    rentals: Arc<RwLock<HashMap<RentalId, Rental>>>,
}

impl InMemoryRentalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, bypassing validation
    pub async fn seeded(properties: Vec<Property>, tenants: Vec<Tenant>, rentals: Vec<Rental>) -> Self {
        let store = Self::new();
        {
            let mut map = store.properties.write().await;
            for property in properties {
                map.insert(property.id, property);
            }
        }
        {
            let mut map = store.tenants.write().await;
            for tenant in tenants {
                map.insert(tenant.id, tenant);
            }
        }
        {
            let mut map = store.rentals.write().await;
            for rental in rentals {
                map.insert(rental.id, rental);
            }
        }
        store
    }
}

fn sorted_by_creation<T: Clone>(values: impl Iterator<Item = T>, key: impl Fn(&T) -> chrono::DateTime<Utc>) -> Vec<T> {
    let mut items: Vec<T> = values.collect();
    items.sort_by_key(|item| key(item));
    items
}

impl DomainPort for InMemoryRentalStore {}

#[async_trait]
impl RentalStorePort for InMemoryRentalStore {
    #[instrument(skip(self), fields(rental_id = %id))]
    async fn get_rental_by_id(&self, id: RentalId) -> Result<Rental, PortError> {
        self.rentals
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Rental", id))
    }

    async fn list_rentals(&self) -> Result<Vec<Rental>, PortError> {
        let rentals = self.rentals.read().await;
        Ok(sorted_by_creation(rentals.values().cloned(), |r| r.created_at))
    }

    #[instrument(skip(self, rental), fields(rental_id = %rental.id))]
    async fn create_rental(&self, rental: Rental) -> Result<Rental, PortError> {
        rental.validate()?;
        if !self.properties.read().await.contains_key(&rental.property_id) {
            return Err(PortError::not_found("Property", rental.property_id));
        }
        if !self.tenants.read().await.contains_key(&rental.tenant_id) {
            return Err(PortError::not_found("Tenant", rental.tenant_id));
        }

        let mut rentals = self.rentals.write().await;
        if rentals.contains_key(&rental.id) {
            return Err(PortError::conflict(format!("rental {} already exists", rental.id)));
        }
        rentals.insert(rental.id, rental.clone());
        debug!("rental created");
        Ok(rental)
    }

    #[instrument(skip(self, rental), fields(rental_id = %rental.id))]
    async fn update_rental(&self, mut rental: Rental) -> Result<Rental, PortError> {
        rental.validate()?;
        let mut rentals = self.rentals.write().await;
        let existing = rentals
            .get(&rental.id)
            .ok_or_else(|| PortError::not_found("Rental", rental.id))?;
        rental.created_at = existing.created_at;
        rental.updated_at = Utc::now();
        rentals.insert(rental.id, rental.clone());
        debug!("rental updated");
        Ok(rental)
    }

    async fn get_property(&self, id: PropertyId) -> Result<Property, PortError> {
        self.properties
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Property", id))
    }

    async fn list_properties(&self) -> Result<Vec<Property>, PortError> {
        let properties = self.properties.read().await;
        Ok(sorted_by_creation(properties.values().cloned(), |p| p.created_at))
    }

    #[instrument(skip(self, property), fields(property_id = %property.id))]
    async fn create_property(&self, property: Property) -> Result<Property, PortError> {
        property.validate()?;
        let mut properties = self.properties.write().await;
        if properties.contains_key(&property.id) {
            return Err(PortError::conflict(format!("property {} already exists", property.id)));
        }
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    #[instrument(skip(self, property), fields(property_id = %property.id))]
    async fn update_property(&self, mut property: Property) -> Result<Property, PortError> {
        property.validate()?;
        let mut properties = self.properties.write().await;
        let existing = properties
            .get(&property.id)
            .ok_or_else(|| PortError::not_found("Property", property.id))?;
        property.created_at = existing.created_at;
        property.updated_at = Utc::now();
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn get_tenant(&self, id: TenantId) -> Result<Tenant, PortError> {
        self.tenants
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Tenant", id))
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>, PortError> {
        let tenants = self.tenants.read().await;
        Ok(sorted_by_creation(tenants.values().cloned(), |t| t.created_at))
    }

    #[instrument(skip(self, tenant), fields(tenant_id = %tenant.id))]
    async fn create_tenant(&self, tenant: Tenant) -> Result<Tenant, PortError> {
        tenant.validate()?;
        let mut tenants = self.tenants.write().await;
        if tenants.contains_key(&tenant.id) {
            return Err(PortError::conflict(format!("tenant {} already exists", tenant.id)));
        }
        tenants.insert(tenant.id, tenant.clone());
        Ok(tenant)
    }

    #[instrument(skip(self, tenant), fields(tenant_id = %tenant.id))]
    async fn update_tenant(&self, mut tenant: Tenant) -> Result<Tenant, PortError> {
        tenant.validate()?;
        let mut tenants = self.tenants.write().await;
        let existing = tenants
            .get(&tenant.id)
            .ok_or_else(|| PortError::not_found("Tenant", tenant.id))?;
        tenant.created_at = existing.created_at;
        tenant.updated_at = Utc::now();
        tenants.insert(tenant.id, tenant.clone());
        Ok(tenant)
    }
}
