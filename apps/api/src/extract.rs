//! Resume text extraction boundary.
//!
//! Uploads arrive as raw bytes; everything downstream (keyword matching,
//! enhancement prompts) wants plain text. The trait keeps handlers testable
//! with canned text while the real implementation decodes PDFs.

use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document could not be decoded: {0}")]
    Malformed(String),
    #[error("extraction task failed: {0}")]
    TaskFailed(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// Extracts text from PDF uploads with `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, bytes: Bytes) -> Result<String, ExtractionError> {
        // PDF decoding is CPU-bound; keep it off the async executor.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| ExtractionError::TaskFailed(e.to_string()))?
            .map_err(|e| ExtractionError::Malformed(e.to_string()))?;
        Ok(text)
    }
}
