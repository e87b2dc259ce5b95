//! Integration tests for the idea validation HTTP surface.
//!
//! Drives the full router (CORS, tracing and timeout layers included) with a
//! scripted provider in place of the hosted model.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use idea_validator::adapters::ai::MockAIProvider;
use idea_validator::adapters::{app_router, ValidationAppState};
use idea_validator::application::GenerationSettings;
use idea_validator::domain::validation::clarification_prompt;
use idea_validator::ports::AIError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(provider: &MockAIProvider) -> Router {
    let state = ValidationAppState::new(Arc::new(provider.clone()), GenerationSettings::default());
    app_router(state, Duration::from_secs(30))
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// POST /validate
// =============================================================================

#[tokio::test]
async fn validate_echoes_fields_and_asks_for_confirmation() {
    let provider = MockAIProvider::new().with_response("Industry: Fintech\n- ...");
    let body = json!({
        "problem": "No easy way to track expenses",
        "solution": "Mobile app with AI categorization"
    });

    let (status, json) = send(app(&provider), post_json("/validate", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "needs_confirmation");
    assert_eq!(json["response"], "Industry: Fintech\n- ...");
    assert_eq!(json["original_data"]["problem"], "No easy way to track expenses");
    assert_eq!(json["original_data"]["solution"], "Mobile app with AI categorization");
    assert_eq!(json["original_data"]["user_input"], "");

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.contains("No easy way to track expenses"));
}

#[tokio::test]
async fn validate_with_empty_body_uses_empty_fields() {
    let provider = MockAIProvider::new().with_response("analysis");

    let (status, json) = send(app(&provider), post_json("/validate", Body::empty())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["original_data"]["problem"], "");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn validate_with_garbage_body_still_answers() {
    let provider = MockAIProvider::new().with_response("analysis");

    let (status, json) = send(app(&provider), post_json("/validate", "}{ not json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "needs_confirmation");
}

#[tokio::test]
async fn validate_keeps_string_fields_beside_a_numeric_one() {
    let provider = MockAIProvider::new().with_response("analysis");
    let body = json!({
        "problem": "No easy way to track expenses",
        "solution": "Mobile app",
        "key_resources": 42
    });

    let (status, json) = send(app(&provider), post_json("/validate", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["original_data"]["problem"], "No easy way to track expenses");
    assert_eq!(json["original_data"]["solution"], "Mobile app");
    assert_eq!(json["original_data"]["key_resources"], "42");
    assert!(provider.get_calls()[0]
        .prompt
        .contains("No easy way to track expenses"));
}

#[tokio::test]
async fn validate_provider_failure_is_json_500() {
    let provider = MockAIProvider::new().with_error(AIError::unavailable("model overloaded"));

    let (status, json) = send(app(&provider), post_json("/validate", "{}")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("model overloaded"));
}

#[tokio::test]
async fn validate_provider_timeout_is_json_500() {
    let provider = MockAIProvider::new().with_error(AIError::timeout(Duration::from_secs(60)));

    let (status, json) = send(app(&provider), post_json("/validate", "{}")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

// =============================================================================
// POST /confirm
// =============================================================================

#[tokio::test]
async fn confirm_yes_in_any_case_is_acknowledged() {
    for answer in ["yes", "Yes", "YES"] {
        let provider = MockAIProvider::new();
        let body = json!({ "confirmation": answer, "original_data": {} });

        let (status, json) = send(app(&provider), post_json("/confirm", body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["response"], "Great! Proceeding to next steps...");
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn confirm_no_requests_clarification() {
    let provider = MockAIProvider::new().with_response("1. How large is the market?");
    let body = json!({
        "confirmation": "no",
        "original_data": { "problem": "No easy way to track expenses" }
    });

    let (status, json) = send(app(&provider), post_json("/confirm", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "needs_clarification");
    assert_eq!(json["response"], "1. How large is the market?");

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, clarification_prompt());
}

#[tokio::test]
async fn confirm_rejects_anything_but_yes_or_no() {
    for answer in ["", "maybe", " yes", "y"] {
        let provider = MockAIProvider::new();
        let body = json!({ "confirmation": answer });

        let (status, json) = send(app(&provider), post_json("/confirm", body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "answer {:?}", answer);
        assert_eq!(json, json!({ "error": "Invalid confirmation" }));
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn confirm_with_empty_body_is_invalid_confirmation() {
    let provider = MockAIProvider::new();

    let (status, json) = send(app(&provider), post_json("/confirm", Body::empty())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid confirmation");
}

#[tokio::test]
async fn confirm_with_malformed_body_is_rejected() {
    let provider = MockAIProvider::new();

    let (status, json) = send(app(&provider), post_json("/confirm", "{\"confirmation\":")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Malformed request body: "));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn confirm_clarification_failure_is_json_500() {
    let provider = MockAIProvider::new().with_error(AIError::rate_limited(30));
    let body = json!({ "confirmation": "NO" });

    let (status, json) = send(app(&provider), post_json("/confirm", body.to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

// =============================================================================
// GET /health and cross-cutting layers
// =============================================================================

#[tokio::test]
async fn health_reports_provider_and_model() {
    let provider = MockAIProvider::new();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, json) = send(app(&provider), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model"], "mock-model-1");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let provider = MockAIProvider::new();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/validate")
        .header(header::ORIGIN, "https://founder.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app(&provider).oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let provider = MockAIProvider::new();
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();

    let (status, _) = send(app(&provider), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
