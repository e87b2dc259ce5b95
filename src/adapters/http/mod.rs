//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles every endpoint with the cross-cutting layers:
//! permissive CORS, request tracing and a whole-request timeout.

pub mod validation;

pub use validation::{routes as validation_routes, ValidationAppState};

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn app_router(state: ValidationAppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    validation_routes()
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
