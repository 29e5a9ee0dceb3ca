//! Resume analysis service.
//!
//! Two capabilities behind one HTTP API: scoring an uploaded resume against
//! a configured job description by content-keyword overlap, and rewriting a
//! resume with a hosted language model, returned as suggestions plus a
//! typeset PDF.

pub mod config;
pub mod enhancement;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod matching;
pub mod nlp;
pub mod render;
pub mod routes;
pub mod state;
pub mod upload;
