use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::llm_client::GenerativeModel;
use crate::nlp::LinguisticTagger;
use crate::render::ResumeStyle;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The collaborators are trait objects built once at startup, so tests can
/// swap in canned implementations without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TextExtractor>,
    pub tagger: Arc<dyn LinguisticTagger>,
    pub model: Arc<dyn GenerativeModel>,
    /// Page geometry and styling for the enhanced-resume PDF.
    pub style: ResumeStyle,
    pub config: Config,
}
