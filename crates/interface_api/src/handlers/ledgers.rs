//! Ledger session handlers
//!
//! Every handler that touches a ledger locks its session for the whole
//! edit, so two requests on one ledger never interleave.

use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use core_kernel::{LedgerSessionId, RentalId};
use domain_rental::LatestEffectivePrice;
use domain_receipt::{EditOutcome, LedgerController};

use crate::{AppState, error::ApiError};
use crate::dto::ledgers::{EditRequest, LedgerResponse};

const YEARS: std::ops::RangeInclusive<i32> = 1900..=2200;

/// Builds the ledger of `year` for a rental and opens a session on it
pub async fn open_ledger(
    State(state): State<AppState>,
    Path((rental_id, year)): Path<(Uuid, i32)>,
) -> Result<(StatusCode, Json<LedgerResponse>), ApiError> {
    if !YEARS.contains(&year) {
        return Err(ApiError::BadRequest(format!("year {} is out of range", year)));
    }

    let rental = state.store.get_rental_by_id(RentalId::from_uuid(rental_id)).await?;
    let controller = LedgerController::open(
        rental.id,
        rental.terms(),
        year,
        &LatestEffectivePrice,
        state.notifier.clone(),
        state.translator.clone(),
    )
    .map_err(|e| ApiError::from_receipt(e, state.translator.as_ref()))?;

    let (session_id, handle) = state.sessions.open(controller).await;
    let response = LedgerResponse::new(session_id, &*handle.lock().await);

    info!(session_id = %session_id, rental_id = %rental.id, year, "ledger opened");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Current rows of an open ledger
pub async fn get_ledger(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let session_id = LedgerSessionId::from_uuid(session);
    let handle = state.sessions.get(session_id).await?;
    let controller = handle.lock().await;
    Ok(Json(LedgerResponse::new(session_id, &controller)))
}

/// Discards an open ledger
pub async fn close_ledger(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.close(LedgerSessionId::from_uuid(session)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Appends a payment line to a month
pub async fn add_line(
    State(state): State<AppState>,
    Path((session, month)): Path<(Uuid, usize)>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let session_id = LedgerSessionId::from_uuid(session);
    let handle = state.sessions.get(session_id).await?;
    let mut controller = handle.lock().await;
    let outcome = controller.add_payment_line(month);
    respond(&state, session_id, &controller, outcome)
}

/// Removes an additional payment line; line 0 is left in place
pub async fn delete_line(
    State(state): State<AppState>,
    Path((session, month, line)): Path<(Uuid, usize, usize)>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let session_id = LedgerSessionId::from_uuid(session);
    let handle = state.sessions.get(session_id).await?;
    let mut controller = handle.lock().await;
    let outcome = controller.delete_payment_line(month, line);
    respond(&state, session_id, &controller, outcome)
}

/// Applies a form edit to a month
pub async fn edit_month(
    State(state): State<AppState>,
    Path((session, month)): Path<(Uuid, usize)>,
    Json(request): Json<EditRequest>,
) -> Result<Json<LedgerResponse>, ApiError> {
    request.validate()?;
    let session_id = LedgerSessionId::from_uuid(session);
    let handle = state.sessions.get(session_id).await?;
    let mut controller = handle.lock().await;
    let outcome = controller.set_field(month, &request.field, request.value, request.line);
    respond(&state, session_id, &controller, outcome)
}

fn respond(
    state: &AppState,
    session_id: LedgerSessionId,
    controller: &LedgerController,
    outcome: EditOutcome,
) -> Result<Json<LedgerResponse>, ApiError> {
    match outcome {
        EditOutcome::Applied => Ok(Json(LedgerResponse::new(session_id, controller))),
        EditOutcome::Rejected(err) => Err(ApiError::from_receipt(err, state.translator.as_ref())),
    }
}
