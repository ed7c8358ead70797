//! Single-page web UI for ytgrab
//!
//! Every interaction is one request: `GET /?url=` validates and fetches,
//! `POST /download` re-fetches and downloads the chosen quality, and
//! `POST /theme` stores the session's display mode.

pub mod error;
mod handlers;
pub mod session;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use ytgrab_core::{Downloader, Extractor, QualityOrder};

pub use error::UserFacingError;
pub use session::{SessionStore, Theme};

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
    pub downloader: Downloader,
    pub quality_order: QualityOrder,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(
        extractor: Arc<dyn Extractor>,
        download_dir: std::path::PathBuf,
        quality_order: QualityOrder,
    ) -> Self {
        Self {
            downloader: Downloader::new(extractor.clone(), download_dir),
            extractor,
            quality_order,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/download", post(handlers::download))
        .route("/theme", post(handlers::set_theme))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Bind `listen_addr` and serve until the process is stopped.
pub async fn serve(state: AppState, listen_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Web UI listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
