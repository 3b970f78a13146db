//! Caseforge service binary.
//!
//! Loads configuration, wires adapters by credential presence, and serves
//! the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use caseforge::adapters::ai::{GeminiConfig, GeminiModel};
use caseforge::adapters::docs::{GoogleDocsConfig, GoogleDocsSource};
use caseforge::adapters::export::SpreadsheetExporter;
use caseforge::adapters::extract::{default_pdf_chain, default_word_chain};
use caseforge::adapters::http::{api_router, AppState};
use caseforge::adapters::storage::InMemoryProjectStore;
use caseforge::application::{
    AnalysisPipeline, DocumentDecoder, ExportService, RemoteDocumentFetcher, TestCaseGenerator,
};
use caseforge::config::AppConfig;
use caseforge::ports::{GenerativeModel, RemoteDocumentSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let model: Option<Arc<dyn GenerativeModel>> = config.ai.gemini_api_key.as_ref().map(|key| {
        let gemini = GeminiModel::new(
            GeminiConfig::new(key.clone())
                .with_model(config.ai.model.clone())
                .with_timeout(config.ai.timeout())
                .with_max_retries(config.ai.max_retries),
        );
        Arc::new(gemini) as Arc<dyn GenerativeModel>
    });
    if model.is_none() {
        tracing::warn!("no Gemini credential configured, test cases will use fallback generation");
    }

    let source: Option<Arc<dyn RemoteDocumentSource>> =
        config.docs.google_api_key.as_ref().map(|key| {
            let docs = GoogleDocsSource::new(
                GoogleDocsConfig::new(key.clone()).with_timeout(config.docs.timeout()),
            );
            Arc::new(docs) as Arc<dyn RemoteDocumentSource>
        });
    if source.is_none() {
        tracing::warn!("no Google credential configured, document links will serve demo content");
    }

    let pipeline = Arc::new(AnalysisPipeline::new(
        DocumentDecoder::new(default_pdf_chain(), default_word_chain()),
        RemoteDocumentFetcher::new(source),
        TestCaseGenerator::new(model),
    ));
    let exporter = Arc::new(ExportService::new(Arc::new(SpreadsheetExporter)));
    let projects = Arc::new(InMemoryProjectStore::new());

    let app = api_router(AppState::new(pipeline, exporter, projects))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "caseforge listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(parsed))
}
