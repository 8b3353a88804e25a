//! News Pulse API Server
//!
//! HTTP API server that turns a company name into a complete comparative
//! news sentiment report with a Hindi audio summary.

mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use pulse_analysis::TopicExtractor;
use pulse_embedding::{EmbeddingConfig, OpenAiEmbeddings, RelevanceRanker};
use pulse_inference::{
    GoogleTts, HfSentimentClassifier, HfSummarizer, YakeKeyphrases, DEFAULT_HF_API_BASE,
    DEFAULT_SENTIMENT_MODEL, DEFAULT_SUMMARIZATION_MODEL, DEFAULT_TTS_API_BASE,
};
use pulse_news::NewsApiClient;
use pulse_services::{ReportService, ReportServiceConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<ReportService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pulse_api=debug")),
        )
        .init();

    info!("Starting News Pulse API");

    // Initialize news retrieval
    let news_api_key = std::env::var("NEWS_API_KEY").unwrap_or_default();
    if news_api_key.is_empty() {
        info!("NEWS_API_KEY not set - article retrieval will fail until it is configured");
    }
    let news = Arc::new(NewsApiClient::new(news_api_key));

    // Initialize relevance ranking
    // Ranking degrades to retrieval order when the embedding endpoint is
    // not configured or unreachable, so the key is optional.
    let embeddings = OpenAiEmbeddings::new(EmbeddingConfig {
        api_key: std::env::var("EMBEDDING_API_KEY").unwrap_or_default(),
        api_base: std::env::var("EMBEDDING_API_BASE").ok(),
        model: std::env::var("EMBEDDING_MODEL")
            .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
    });
    let ranker = RelevanceRanker::new(Arc::new(embeddings));

    // Initialize Hugging Face inference clients
    let hf_base = std::env::var("HF_API_BASE").unwrap_or_else(|_| DEFAULT_HF_API_BASE.to_string());
    let hf_token = std::env::var("HF_API_TOKEN").ok();
    if hf_token.is_none() {
        info!("HF_API_TOKEN not set - using unauthenticated Hugging Face requests");
    }
    let summarizer = Arc::new(HfSummarizer::new(
        hf_base.clone(),
        hf_token.clone(),
        std::env::var("SUMMARIZATION_MODEL")
            .unwrap_or_else(|_| DEFAULT_SUMMARIZATION_MODEL.to_string()),
    ));
    let classifier = Arc::new(HfSentimentClassifier::new(
        hf_base,
        hf_token,
        std::env::var("SENTIMENT_MODEL").unwrap_or_else(|_| DEFAULT_SENTIMENT_MODEL.to_string()),
    ));

    // Topic extraction runs in-process
    let topics = TopicExtractor::new(Arc::new(YakeKeyphrases::new()));

    // Initialize speech synthesis
    let speech = Arc::new(GoogleTts::new(
        std::env::var("TTS_API_BASE").unwrap_or_else(|_| DEFAULT_TTS_API_BASE.to_string()),
    ));

    let report_config = ReportServiceConfig {
        audio_dir: std::env::var("AUDIO_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("outputs/audio")),
        ..ReportServiceConfig::default()
    };
    info!(
        "Audio reports will be written to: {}",
        report_config.audio_dir.display()
    );

    let report_service = Arc::new(ReportService::new(
        news,
        ranker,
        summarizer,
        classifier,
        topics,
        speech,
        report_config,
    ));

    // Create app state
    let state = AppState { report_service };

    // Configure CORS for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Build router
    let app = Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server
    let host: IpAddr = std::env::var("HOST")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(|| IpAddr::from([0, 0, 0, 0]));
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::new(host, port);
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when ctrl-c arrives so the server can drain connections
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping server");
}
