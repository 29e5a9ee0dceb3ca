use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_api::config::Config;
use resume_api::extract::PdfTextExtractor;
use resume_api::llm_client::{self, CohereClient};
use resume_api::nlp::HeuristicTagger;
use resume_api::render::default_style;
use resume_api::routes::build_router;
use resume_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    let crate_filter = env!("CARGO_PKG_NAME").replace('-', "_");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", crate_filter, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = Arc::new(PdfTextExtractor);
    info!("PDF text extractor initialized");

    let tagger = Arc::new(HeuristicTagger::new());
    info!("Linguistic tagger initialized");

    let model = Arc::new(CohereClient::new(config.cohere_api_key.clone()));
    info!("Model client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        extractor,
        tagger,
        model,
        style: default_style(),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
