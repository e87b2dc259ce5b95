//! HTTP handlers for idea validation endpoints
//!
//! These handlers connect Axum routes to the validation command handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    ConfirmAnalysisCommand, ConfirmAnalysisError, ConfirmAnalysisHandler, GenerationSettings,
    ValidateIdeaCommand, ValidateIdeaHandler,
};
use crate::domain::validation::{InvalidConfirmation, StartupIdea};
use crate::ports::AIProvider;

use super::dto::{
    ConfirmRequest, ConfirmResponse, ErrorResponse, HealthResponse, RequestBodyError,
    ValidateIdeaRequest, ValidateIdeaResponse,
};

type ErrorReply = (StatusCode, Json<ErrorResponse>);

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct ValidationAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub settings: GenerationSettings,
}

impl ValidationAppState {
    pub fn new(ai_provider: Arc<dyn AIProvider>, settings: GenerationSettings) -> Self {
        Self {
            ai_provider,
            settings,
        }
    }

    pub fn validate_idea_handler(&self) -> ValidateIdeaHandler<dyn AIProvider> {
        ValidateIdeaHandler::new(self.ai_provider.clone(), self.settings)
    }

    pub fn confirm_analysis_handler(&self) -> ConfirmAnalysisHandler<dyn AIProvider> {
        ConfirmAnalysisHandler::new(self.ai_provider.clone(), self.settings)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Body parsing
// ════════════════════════════════════════════════════════════════════════════════

// Only a body that is not a JSON object loses every field.
fn parse_idea(body: &[u8]) -> StartupIdea {
    if body.iter().all(u8::is_ascii_whitespace) {
        return StartupIdea::default();
    }
    let fields = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) => value,
        Ok(_) => {
            tracing::warn!("/validate body is not a JSON object, using empty fields");
            return StartupIdea::default();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable /validate body, using empty fields");
            return StartupIdea::default();
        }
    };
    match serde_json::from_value::<ValidateIdeaRequest>(fields) {
        Ok(req) => req.into(),
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable /validate fields, using empty fields");
            StartupIdea::default()
        }
    }
}

fn parse_confirm(body: &[u8]) -> Result<ConfirmRequest, RequestBodyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ConfirmRequest::default());
    }
    Ok(serde_json::from_slice(body)?)
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Analyze a startup idea
///
/// POST /validate
pub async fn validate_idea(
    State(app_state): State<ValidationAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let cmd = ValidateIdeaCommand {
        idea: parse_idea(&body),
    };

    let handler = app_state.validate_idea_handler();
    let result = handler.handle(cmd).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
    })?;

    let response = ValidateIdeaResponse {
        response: result.analysis,
        status: result.status,
        original_data: result.original_data,
    };

    Ok::<_, ErrorReply>((StatusCode::OK, Json(response)))
}

/// Accept or reject the analysis
///
/// POST /confirm
pub async fn confirm_analysis(
    State(app_state): State<ValidationAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let req = parse_confirm(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected /confirm body");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string())))
    })?;

    let confirmation = req.confirmation.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(InvalidConfirmation.to_string())),
        )
    })?;

    let cmd = ConfirmAnalysisCommand {
        confirmation,
        original_data: req.original_data,
    };

    let handler = app_state.confirm_analysis_handler();
    let result = handler.handle(cmd).await.map_err(|e| match e {
        ConfirmAnalysisError::InvalidConfirmation(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        ),
        ConfirmAnalysisError::AIProvider(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(msg)),
        ),
    })?;

    let response = ConfirmResponse {
        response: result.response,
        status: result.status,
    };

    Ok::<_, ErrorReply>((StatusCode::OK, Json(response)))
}

/// Liveness probe reporting the configured model
///
/// GET /health
pub async fn health(State(app_state): State<ValidationAppState>) -> impl IntoResponse {
    let info = app_state.ai_provider.provider_info();
    Json(HealthResponse {
        status: "ok",
        provider: info.name,
        model: info.model,
    })
}
