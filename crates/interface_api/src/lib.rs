//! HTTP API Layer
//!
//! This crate provides the REST API for the rental ledger using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for records and ledger sessions
//! - **Sessions**: Open ledgers, each behind its own mutex
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Ledger sessions
//!
//! `POST /api/v1/rentals/:id/ledgers/:year` builds a ledger and returns a
//! session id. Edits are then posted against that session; a session holds
//! its ledger until it is deleted or stays idle longer than
//! `session_idle_secs`. Month and line indexes in paths are zero-based.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(Arc::new(InMemoryRentalStore::new()), translator, config);
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;
pub mod sessions;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::Translator;
use domain_rental::RentalStorePort;
use domain_receipt::{LogNotifier, Notifier};

use crate::config::ApiConfig;
use crate::handlers::{health, ledgers, properties, rentals, tenants};
use crate::middleware::{audit_middleware, auth_middleware};
use crate::sessions::LedgerSessions;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RentalStorePort>,
    pub sessions: LedgerSessions,
    pub translator: Arc<dyn Translator>,
    pub notifier: Arc<dyn Notifier>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state with no open sessions; notices go to the log
    pub fn new(store: Arc<dyn RentalStorePort>, translator: Arc<dyn Translator>, config: ApiConfig) -> Self {
        Self {
            store,
            sessions: LedgerSessions::with_idle_timeout(config.session_idle_timeout()),
            translator,
            notifier: Arc::new(LogNotifier),
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(health::health_check));

    let property_routes = Router::new()
        .route("/", post(properties::create_property).get(properties::list_properties))
        .route("/:id", get(properties::get_property).put(properties::update_property));

    let tenant_routes = Router::new()
        .route("/", post(tenants::create_tenant).get(tenants::list_tenants))
        .route("/:id", get(tenants::get_tenant).put(tenants::update_tenant));

    let rental_routes = Router::new()
        .route("/", post(rentals::create_rental).get(rentals::list_rentals))
        .route("/:id", get(rentals::get_rental).put(rentals::update_rental))
        .route("/:id/ledgers/:year", post(ledgers::open_ledger));

    let ledger_routes = Router::new()
        .route("/:session", get(ledgers::get_ledger).delete(ledgers::close_ledger))
        .route("/:session/months/:month/lines", post(ledgers::add_line))
        .route(
            "/:session/months/:month/lines/:line",
            axum::routing::delete(ledgers::delete_line),
        )
        .route("/:session/months/:month/edits", post(ledgers::edit_month));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/properties", property_routes)
        .nest("/tenants", tenant_routes)
        .nest("/rentals", rental_routes)
        .nest("/ledgers", ledger_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
