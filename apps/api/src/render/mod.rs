//! Typesetting for the enhanced resume.
//!
//! Two paths share this module: `pdf` typesets classified line blocks
//! directly with printpdf, and `templates` pours markdown content into HTML
//! template files for conversion with wkhtmltopdf. `blocks` decides what
//! each line of the rewrite is, `style` holds the page geometry, and
//! `font_metrics` supplies the character widths both measuring and word
//! wrapping need.

use thiserror::Error;

pub mod blocks;
pub mod font_metrics;
pub mod pdf;
pub mod style;
pub mod templates;

pub use blocks::{classify_lines, LayoutBlock};
pub use pdf::render_resume_pdf;
pub use style::{default_style, ResumeStyle};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf backend error: {0}")]
    Backend(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("converter exited with status {status}: {stderr}")]
    Converter { status: i32, stderr: String },
}
