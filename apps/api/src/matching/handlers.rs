//! Axum route handler for the matching API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::matching::keywords::extract_keywords;
use crate::matching::scoring::score_keywords;
use crate::state::AppState;
use crate::upload::read_resume_field;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// POST /match
///
/// Scores the uploaded resume against the configured job description and
/// reports which keywords matched and which are missing.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let bytes = read_resume_field(multipart).await?;
    let resume_text = state.extractor.extract_text(bytes).await?;

    let resume_keywords = extract_keywords(&resume_text, state.tagger.as_ref());
    let jd_keywords = extract_keywords(&state.config.job_description, state.tagger.as_ref());
    let result = score_keywords(&resume_keywords, &jd_keywords);

    Ok(Json(MatchResponse {
        score: result.score,
        matched_keywords: result.matched.into_iter().collect(),
        missing_keywords: result.missing.into_iter().collect(),
    }))
}
