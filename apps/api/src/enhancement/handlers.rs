//! Axum route handler for the enhancement API.

use axum::extract::{Multipart, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::enhancement::parser::parse_enhancement_reply;
use crate::enhancement::prompts::build_enhancement_prompt;
use crate::errors::AppError;
use crate::render::blocks::classify_lines;
use crate::render::pdf::render_resume_pdf;
use crate::state::AppState;
use crate::upload::read_resume_field;

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub suggestions: Vec<String>,
    pub enhanced_pdf: String,
}

/// POST /enhance
///
/// Rewrites the uploaded resume with the language model and returns the
/// improvement suggestions plus the rewrite typeset as a base64 PDF.
pub async fn handle_enhance(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EnhanceResponse>, AppError> {
    let bytes = read_resume_field(multipart).await?;
    let resume_text = state.extractor.extract_text(bytes).await?;

    let prompt = build_enhancement_prompt(&resume_text);
    let reply = state.model.generate(&prompt).await?;
    let parsed = parse_enhancement_reply(&reply)?;

    let blocks = classify_lines(&parsed.enhanced_text);
    let style = state.style.clone();
    // Typesetting is CPU-bound; keep it off the async executor.
    let pdf = tokio::task::spawn_blocking(move || render_resume_pdf(&blocks, &style))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in pdf render: {e}"))
        })??;

    Ok(Json(EnhanceResponse {
        suggestions: parsed.suggestions,
        enhanced_pdf: STANDARD.encode(pdf),
    }))
}
