//! Generative model client.
//!
//! All Cohere API traffic goes through `CohereClient`; no other module talks
//! to the hosted API directly. The `GenerativeModel` trait is the seam that
//! lets handlers run against scripted replies in tests.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const COHERE_API_URL: &str = "https://api.cohere.ai/v1/chat";
/// The model used for every enhancement call.
pub const MODEL: &str = "command";
const TEMPERATURE: f32 = 0.5;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty text")]
    EmptyText,
}

#[derive(Debug, Serialize)]
struct CohereRequest<'a> {
    model: &'a str,
    message: &'a str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CohereResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// Produces free text from a prompt.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Cohere chat API client. One request per call; failures surface to the
/// caller instead of being retried here.
#[derive(Clone)]
pub struct CohereClient {
    client: Client,
    api_key: String,
}

impl CohereClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl GenerativeModel for CohereClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = CohereRequest {
            model: MODEL,
            message: prompt,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(COHERE_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the error message
            let message = serde_json::from_str::<CohereError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: CohereResponse = response.json().await?;
        if reply.text.trim().is_empty() {
            return Err(LlmError::EmptyText);
        }

        debug!("model call succeeded: {} chars returned", reply.text.len());
        Ok(reply.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = CohereRequest {
            model: MODEL,
            message: "Improve this resume.",
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "command");
        assert_eq!(json["message"], "Improve this resume.");
        assert_eq!(json["temperature"], 0.5);
    }

    #[test]
    fn test_error_body_message_is_extracted() {
        let body = r#"{"message": "invalid api token"}"#;
        let parsed: CohereError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.message, "invalid api token");
    }
}
