use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde_json::{json, Value};
use tower::ServiceExt;

use resume_api::config::Config;
use resume_api::extract::{ExtractionError, TextExtractor};
use resume_api::llm_client::{GenerativeModel, LlmError};
use resume_api::nlp::HeuristicTagger;
use resume_api::render::default_style;
use resume_api::routes::build_router;
use resume_api::state::AppState;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

// ────────────────────────────────────────────────────────────────────────────
// Test doubles
// ────────────────────────────────────────────────────────────────────────────

struct FixedTextExtractor(&'static str);

#[async_trait::async_trait]
impl TextExtractor for FixedTextExtractor {
    async fn extract_text(&self, _bytes: Bytes) -> Result<String, ExtractionError> {
        Ok(self.0.to_string())
    }
}

struct FailingExtractor;

#[async_trait::async_trait]
impl TextExtractor for FailingExtractor {
    async fn extract_text(&self, _bytes: Bytes) -> Result<String, ExtractionError> {
        Err(ExtractionError::Malformed("bad xref table".to_string()))
    }
}

struct ScriptedModel(&'static str);

#[async_trait::async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.0.to_string())
    }
}

struct RejectingModel;

#[async_trait::async_trait]
impl GenerativeModel for RejectingModel {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 401,
            message: "invalid api token".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn test_config(job_description: &str) -> Config {
    Config {
        cohere_api_key: "test-key".to_string(),
        job_description: job_description.to_string(),
        port: 0,
        rust_log: "info".to_string(),
    }
}

fn test_app(
    extractor: Arc<dyn TextExtractor>,
    model: Arc<dyn GenerativeModel>,
    job_description: &str,
) -> axum::Router {
    let state = AppState {
        extractor,
        tagger: Arc::new(HeuristicTagger::new()),
        model,
        style: default_style(),
        config: test_config(job_description),
    };
    build_router(state)
}

fn multipart_body(field_name: &str, contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"resume.pdf\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(path: &str, field_name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field_name, b"%PDF-1.4 fake")))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Health
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn given_running_service_when_health_checked_then_reports_ok() {
    let app = test_app(
        Arc::new(FixedTextExtractor("")),
        Arc::new(ScriptedModel("")),
        "",
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "resume-api");
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn given_resume_covering_half_the_posting_when_matched_then_score_is_fifty() {
    let app = test_app(
        Arc::new(FixedTextExtractor("Experienced Python and Flask developer")),
        Arc::new(ScriptedModel("")),
        "python flask ml teamwork",
    );

    let response = app
        .oneshot(multipart_request("/match", "resume"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["score"], 50);
    assert_eq!(body["matched_keywords"], json!(["flask", "python"]));
    assert_eq!(body["missing_keywords"], json!(["ml", "teamwork"]));
}

#[tokio::test]
async fn given_resume_covering_every_keyword_when_matched_then_score_is_hundred() {
    let app = test_app(
        Arc::new(FixedTextExtractor("Python, Flask, ML and teamwork all day")),
        Arc::new(ScriptedModel("")),
        "python flask ml teamwork",
    );

    let response = app
        .oneshot(multipart_request("/match", "resume"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["score"], 100);
    assert_eq!(body["missing_keywords"], json!([]));
}

#[tokio::test]
async fn given_form_without_resume_field_when_matched_then_bad_request() {
    let app = test_app(
        Arc::new(FixedTextExtractor("irrelevant")),
        Arc::new(ScriptedModel("")),
        "python",
    );

    let response = app
        .oneshot(multipart_request("/match", "file"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No resume uploaded");
}

#[tokio::test]
async fn given_unreadable_document_when_matched_then_bad_request() {
    let app = test_app(
        Arc::new(FailingExtractor),
        Arc::new(ScriptedModel("")),
        "python",
    );

    let response = app
        .oneshot(multipart_request("/match", "resume"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Failed to extract text from PDF");
}

// ────────────────────────────────────────────────────────────────────────────
// Enhancement
// ────────────────────────────────────────────────────────────────────────────

const WELL_FORMED_REPLY: &str = "\
Suggestions:
1. Quantify your achievements.
2. Lead bullets with action verbs.

Enhanced Resume:
Name: Jane Doe

Summary:
Backend engineer.

Skills:
- Python, Flask";

#[tokio::test]
async fn given_well_formed_reply_when_enhanced_then_returns_suggestions_and_pdf() {
    let app = test_app(
        Arc::new(FixedTextExtractor("Jane Doe, backend engineer")),
        Arc::new(ScriptedModel(WELL_FORMED_REPLY)),
        "python",
    );

    let response = app
        .oneshot(multipart_request("/enhance", "resume"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["suggestions"],
        json!([
            "1. Quantify your achievements.",
            "2. Lead bullets with action verbs.",
        ])
    );

    let encoded = body["enhanced_pdf"].as_str().unwrap();
    let pdf = STANDARD.decode(encoded).unwrap();
    assert!(pdf.starts_with(b"%PDF"), "enhanced_pdf should decode to a PDF");
}

#[tokio::test]
async fn given_reply_without_marker_when_enhanced_then_internal_error() {
    let app = test_app(
        Arc::new(FixedTextExtractor("Jane Doe")),
        Arc::new(ScriptedModel("Sorry, I cannot help with that.")),
        "python",
    );

    let response = app
        .oneshot(multipart_request("/enhance", "resume"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(
        message.contains("Enhancement parsing failed"),
        "unexpected error message: {message}"
    );
}

#[tokio::test]
async fn given_model_rejection_when_enhanced_then_internal_error() {
    let app = test_app(
        Arc::new(FixedTextExtractor("Jane Doe")),
        Arc::new(RejectingModel),
        "python",
    );

    let response = app
        .oneshot(multipart_request("/enhance", "resume"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(
        message.contains("Upstream failure"),
        "unexpected error message: {message}"
    );
}

#[tokio::test]
async fn given_form_without_resume_field_when_enhanced_then_bad_request() {
    let app = test_app(
        Arc::new(FixedTextExtractor("irrelevant")),
        Arc::new(ScriptedModel(WELL_FORMED_REPLY)),
        "python",
    );

    let response = app
        .oneshot(multipart_request("/enhance", "file"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No resume uploaded");
}
