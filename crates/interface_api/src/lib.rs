//! HTTP API Layer
//!
//! This crate serves the claims, rules, analytics, and shopping list
//! operations over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each collection
//! - **Middleware**: Tracing, request logging, CORS
//! - **DTOs**: Request bodies that are not domain types
//! - **Error Handling**: Consistent JSON error responses
//!
//! Stores are injected through [`AppState`]; nothing is held in globals.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::from_config(config);
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::RecordPort;
use domain_items::ItemPort;
use infra_store::{InMemoryRecordStore, JsonFileItemStore};

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{analytics, claims, health, items, rules};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordPort>,
    pub items: Arc<dyn ItemPort>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state from explicit stores
    pub fn new(records: Arc<dyn RecordPort>, items: Arc<dyn ItemPort>, config: ApiConfig) -> Self {
        Self { records, items, config }
    }

    /// Creates state with an empty in-memory record store and an item store
    /// over the configured data file
    pub fn from_config(config: ApiConfig) -> Self {
        let records = Arc::new(InMemoryRecordStore::new());
        let items = Arc::new(JsonFileItemStore::new(config.data_file.clone()));
        Self::new(records, items, config)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Stores and configuration shared with handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:id", get(claims::get_claim));

    let rules_routes = Router::new()
        .route("/", get(rules::list_rules).post(rules::create_rule));

    let items_routes = Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/:id", put(items::update_item).delete(items::delete_item));

    let api_routes = Router::new()
        .nest("/health", health_routes)
        .nest("/claims", claims_routes)
        .nest("/rules", rules_routes)
        .route("/analytics", get(analytics::get_analytics))
        .nest("/items", items_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
