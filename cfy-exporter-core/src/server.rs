//! HTTP surface: the metrics endpoint and an informational landing page.

use crate::exporter::Exporter;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use prometheus::{Encoder, Registry, TextEncoder};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

pub const DEFAULT_METRICS_PATH: &str = "/metrics";

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub listen_address: SocketAddr,
    pub metrics_path: String,
}

#[derive(Clone)]
pub struct AppState {
    pub exporter: Arc<Exporter>,
    pub registry: Registry,
    pub metrics_path: Arc<str>,
}

impl AppState {
    pub fn new(exporter: Exporter, registry: Registry, metrics_path: &str) -> Self {
        Self {
            exporter: Arc::new(exporter),
            registry,
            metrics_path: Arc::from(metrics_path),
        }
    }
}

/// Landing page linking to the metrics path.
pub fn index_page(metrics_path: &str) -> String {
    format!(
        "<html>
<head><title>Cloudify Exporter</title></head>
<body>
<h1>Cloudify Exporter</h1>
<p><a href='{}'>Metrics</a></p>
</body>
</html>",
        metrics_path
    )
}

/// Encode everything registered on `registry` in the text exposition format.
pub fn encode_metrics(registry: &Registry) -> prometheus::Result<Vec<u8>> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}

async fn metrics(State(state): State<AppState>) -> Response {
    if let Err(e) = state.exporter.clone().collect_detached().await {
        error!(error = %e, "Collection pass task failed");
    }

    match encode_metrics(&state.registry) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TextEncoder::new().format_type().to_string())],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(index_page(&state.metrics_path))
}

pub fn router(state: AppState) -> Router {
    let metrics_path = state.metrics_path.to_string();
    let mut app = Router::new().route(&metrics_path, get(metrics));
    if metrics_path != "/" {
        app = app.route("/", get(index));
    }
    app.with_state(state)
}

/// Bind `options.listen_address` and serve until the process exits.
pub async fn serve(options: &ServerOptions, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(options.listen_address).await?;
    info!(
        address = %options.listen_address,
        path = %options.metrics_path,
        "Exporter listening"
    );
    axum::serve(listener, router(state)).await
}
