//! Tenant handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use core_kernel::TenantId;
use domain_rental::Tenant;

use crate::{AppState, error::ApiError};
use crate::dto::records::TenantRequest;

/// Creates a new tenant
pub async fn create_tenant(
    State(state): State<AppState>,
    Json(request): Json<TenantRequest>,
) -> Result<(StatusCode, Json<Tenant>), ApiError> {
    request.validate()?;
    let tenant = state.store.create_tenant(request.into_tenant()).await?;
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// Lists tenants
pub async fn list_tenants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Tenant>>, ApiError> {
    Ok(Json(state.store.list_tenants().await?))
}

/// Gets a tenant by ID
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tenant>, ApiError> {
    Ok(Json(state.store.get_tenant(TenantId::from_uuid(id)).await?))
}

/// Updates a tenant
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TenantRequest>,
) -> Result<Json<Tenant>, ApiError> {
    request.validate()?;
    let mut tenant = state.store.get_tenant(TenantId::from_uuid(id)).await?;
    request.apply_to(&mut tenant);
    Ok(Json(state.store.update_tenant(tenant).await?))
}
