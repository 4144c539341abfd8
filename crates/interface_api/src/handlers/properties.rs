//! Property handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use core_kernel::PropertyId;
use domain_rental::Property;

use crate::{AppState, error::ApiError};
use crate::dto::records::PropertyRequest;

/// Creates a new property
pub async fn create_property(
    State(state): State<AppState>,
    Json(request): Json<PropertyRequest>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    request.validate()?;
    let property = state.store.create_property(request.into_property()).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Lists properties
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<Property>>, ApiError> {
    Ok(Json(state.store.list_properties().await?))
}

/// Gets a property by ID
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Property>, ApiError> {
    Ok(Json(state.store.get_property(PropertyId::from_uuid(id)).await?))
}

/// Updates a property
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PropertyRequest>,
) -> Result<Json<Property>, ApiError> {
    request.validate()?;
    let mut property = state.store.get_property(PropertyId::from_uuid(id)).await?;
    request.apply_to(&mut property);
    Ok(Json(state.store.update_property(property).await?))
}
