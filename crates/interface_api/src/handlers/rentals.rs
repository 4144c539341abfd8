//! Rental handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use core_kernel::RentalId;
use domain_rental::Rental;

use crate::{AppState, error::ApiError};
use crate::dto::records::RentalRequest;

/// Creates a new rental for an existing property and tenant
pub async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<RentalRequest>,
) -> Result<(StatusCode, Json<Rental>), ApiError> {
    request.validate()?;
    let rental = state.store.create_rental(request.into_rental()).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

/// Lists rentals
pub async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Rental>>, ApiError> {
    Ok(Json(state.store.list_rentals().await?))
}

/// Gets a rental by ID
pub async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Rental>, ApiError> {
    Ok(Json(state.store.get_rental_by_id(RentalId::from_uuid(id)).await?))
}

/// Updates the terms of a rental
///
/// Ledger sessions already open keep the terms they were built with.
pub async fn update_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RentalRequest>,
) -> Result<Json<Rental>, ApiError> {
    request.validate()?;
    let mut rental = state.store.get_rental_by_id(RentalId::from_uuid(id)).await?;
    request.apply_to(&mut rental);
    Ok(Json(state.store.update_rental(rental).await?))
}
