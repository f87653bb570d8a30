use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use common::config::{BackendConfig, Config};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    error::ProcessingError,
    importer::Importer,
    model::{ErrorResponse, PointsResponse, ProcessResponse, Receipt},
    processor::Processor,
    scorers::Scorer,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "target/debug/config/total_config.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, Box<dyn Error + Send + Sync>> {
    let args = Args::parse();
    println!("Loading config from: {}", args.config);
    let config = Config::load(&args.config)?;
    println!("Loaded config: {:#?}", config);

    Ok(config)
}

/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn initialize_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Tracing already initialized: {}", e);
    }
}

pub fn install_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

pub struct AppState<S: Scorer<Receipt> + 'static> {
    importer: Arc<Importer<Receipt>>,
    processor: Arc<Processor<Receipt, S>>,
    metrics: Option<PrometheusHandle>,
}

impl<S: Scorer<Receipt> + 'static> AppState<S> {
    pub fn new(
        importer: Arc<Importer<Receipt>>,
        processor: Arc<Processor<Receipt, S>>,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            importer,
            processor,
            metrics,
        }
    }
}

impl<S: Scorer<Receipt> + 'static> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            importer: self.importer.clone(),
            processor: self.processor.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

pub fn build_router<S: Scorer<Receipt> + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt::<S>))
        .route("/receipts/{id}/points", get(get_points::<S>))
        .route("/health", get(health_check))
        .route("/metrics", get(render_metrics::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_backend<S: Scorer<Receipt> + 'static>(
    config: BackendConfig,
    state: AppState<S>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = build_router(state);

    tracing::info!("Starting backend service at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Backend service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

pub async fn process_receipt<S: Scorer<Receipt> + 'static>(
    State(state): State<AppState<S>>,
    Json(receipt): Json<Receipt>,
) -> Response {
    match state.importer.import(&receipt).await {
        Ok(id) => (StatusCode::OK, Json(ProcessResponse { id })).into_response(),
        Err(e) => {
            tracing::error!(
                error = %e,
                retailer = %receipt.retailer,
                "Failed to import receipt"
            );
            error_response(&e)
        }
    }
}

pub async fn get_points<S: Scorer<Receipt> + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response {
    match state.processor.points(&id).await {
        Ok(points) => (StatusCode::OK, Json(PointsResponse { points })).into_response(),
        Err(e) => {
            if !matches!(e, ProcessingError::NotFound(_)) {
                tracing::error!(error = %e, id = %id, "Failed to score receipt");
            }
            error_response(&e)
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

async fn render_metrics<S: Scorer<Receipt> + 'static>(
    State(state): State<AppState<S>>,
) -> Response {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn error_response(e: &ProcessingError) -> Response {
    let status = match e {
        ProcessingError::NotFound(_) => StatusCode::NOT_FOUND,
        ProcessingError::Decode { .. }
        | ProcessingError::Encode(_)
        | ProcessingError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
