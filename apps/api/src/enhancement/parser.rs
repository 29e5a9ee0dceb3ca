//! Splits the model's reply into suggestions and the rewritten resume.

use thiserror::Error;

/// Marker line the prompt asks the model to emit between the suggestion
/// list and the rewritten resume.
pub const ENHANCED_RESUME_MARKER: &str = "Enhanced Resume:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("reply has no \"Enhanced Resume:\" marker")]
    MissingMarker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementResult {
    pub suggestions: Vec<String>,
    pub enhanced_text: String,
}

/// Parses a model reply into its suggestion list and enhanced resume text.
///
/// The reply is split at the first marker occurrence: suggestions are the
/// trimmed head lines that start with a digit 1 through 9, in reply order
/// and with their numbering kept; the trimmed tail is the resume rewrite.
/// A reply without the marker cannot be split and is an error the caller
/// must surface, not paper over.
pub fn parse_enhancement_reply(reply: &str) -> Result<EnhancementResult, ParseError> {
    let (head, tail) = reply
        .split_once(ENHANCED_RESUME_MARKER)
        .ok_or(ParseError::MissingMarker)?;

    let suggestions = head
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(|c: char| matches!(c, '1'..='9')))
        .map(str::to_string)
        .collect();

    Ok(EnhancementResult {
        suggestions,
        enhanced_text: tail.trim().to_string(),
    })
}
