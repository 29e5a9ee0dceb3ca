//! Multipart upload handling shared by the matching and enhancement routes.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// Form field name both endpoints expect the document under.
pub const RESUME_FIELD: &str = "resume";

/// Pulls the resume file out of a multipart form.
///
/// Fields other than `resume` are skipped. A form without the field, or
/// with an unreadable body, is a client error.
pub async fn read_resume_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Input(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Input(format!("Could not read uploaded file: {e}")))?;
        return Ok(bytes);
    }

    Err(AppError::Input("No resume uploaded".to_string()))
}
