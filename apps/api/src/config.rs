use anyhow::{Context, Result};

/// Job description that uploaded resumes are scored against.
/// A deployment can swap it via the JOB_DESCRIPTION env var; it stays a
/// single static string for the process lifetime.
pub const DEFAULT_JOB_DESCRIPTION: &str = "We are looking for a Python developer with \
experience in Flask, REST APIs, machine learning, and teamwork. Knowledge of NLP is a plus.";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub cohere_api_key: String,
    pub job_description: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cohere_api_key: require_env("COHERE_API_KEY")?,
            job_description: std::env::var("JOB_DESCRIPTION")
                .unwrap_or_else(|_| DEFAULT_JOB_DESCRIPTION.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
