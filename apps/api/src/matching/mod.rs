//! Resume-to-job-description keyword matching.
//!
//! Pipeline: extracted resume text and the configured job description are
//! both reduced to content-word lemma sets, then compared. The score is the
//! share of job-description keywords the resume covers.

pub mod handlers;
pub mod keywords;
pub mod scoring;

pub use keywords::extract_keywords;
pub use scoring::{score_keywords, MatchResult};
