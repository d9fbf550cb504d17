//! HTTP boundary for the summarization pipeline.
//!
//! One route: `POST /api/generate`. The browser form is an external
//! collaborator; this module only pins down the request/response payloads
//! and the status mapping for pipeline failures.

mod error;
mod routes;

pub use error::RouteError;
pub use routes::{GeneratedOutput, GenerateRequest, GenerateResponse};

use std::net::SocketAddr;

use axum::{routing::post, Router};
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

use crate::config::PipelineConfig;

#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    /// Process-wide credential; a per-request `apiKey` field overrides it
    pub api_key: Option<String>,
    /// Override for the completion service endpoint, used in tests
    pub completion_base_url: Option<String>,
    pub config: PipelineConfig,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(routes::generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening for summarization requests");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}
