//! Route definitions for idea validation endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{confirm_analysis, health, validate_idea, ValidationAppState};

/// Create the validation router with all endpoints
///
/// # Endpoints
///
/// - `POST /validate` - Analyze a startup idea
/// - `POST /confirm` - Confirm the analysis or ask for clarification
/// - `GET /health` - Liveness and configured model
pub fn routes() -> Router<ValidationAppState> {
    Router::new()
        .route("/validate", post(validate_idea))
        .route("/confirm", post(confirm_analysis))
        .route("/health", get(health))
}
