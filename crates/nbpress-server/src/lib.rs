//! REST API server for notebook conversion
//!
//! Accepts one uploaded `.ipynb` file per request and streams back the
//! converted document:
//! - `POST /convert/html` — full-fidelity HTML rendering
//! - `POST /convert/pdf` — simplified, printable PDF rendering
//!
//! Each request builds its cell model from the uploaded bytes and holds no
//! state beyond the request lifetime; the converter and its engines are
//! shared and stateless.

mod handlers;
mod types;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use nbpress_core::NotebookConverter;
use nbpress_html::ClassicHtmlEngine;
use nbpress_pdf::MarkupPdfEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handlers::*;
pub use types::*;

/// Largest accepted notebook upload, in bytes
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Converter holding the two format engines
    pub converter: NotebookConverter,
}

impl AppState {
    /// Create state wired to the production engines
    #[must_use]
    pub fn new() -> Self {
        Self {
            converter: NotebookConverter::new(
                Arc::new(ClassicHtmlEngine::new()),
                Arc::new(MarkupPdfEngine::new()),
            ),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the API router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/convert/html", post(convert_html))
        .route("/convert/pdf", post(convert_pdf))
        // Middleware
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the API server
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn start_server(addr: &str, state: AppState) -> Result<(), std::io::Error> {
    tracing::info!("Starting API server on {}", addr);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await
}
