//! Resume enhancement pipeline.
//!
//! Extract the uploaded resume's text, prompt the model for a rewrite, split
//! the reply into suggestions and the rewritten resume, then typeset the
//! rewrite as a PDF.

pub mod handlers;
pub mod parser;
pub mod prompts;

pub use parser::{parse_enhancement_reply, EnhancementResult, ParseError};
