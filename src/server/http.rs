//! HTTP server implementation.
//!
//! A small axum application that serves validated file reads. The interesting
//! part is the outcome mapping: containment rejections surface as a generic
//! 403 "Access Denied" with no trace of the rejected fragment, while in-base
//! misses surface as an ordinary 404.

use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use bytes::Bytes;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{ServerError, ServerResult};
use crate::core::config::HttpConfig;
use crate::domains::files::{FileAccessError, FileService};

/// HTTP server for the files domain.
pub struct HttpServer {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The file service performing validated reads.
    files: FileService,
}

/// Query parameters for the file endpoint.
#[derive(Debug, Deserialize)]
struct FileQuery {
    /// Untrusted path fragment, relative to the configured base directory.
    p: String,
}

impl HttpServer {
    /// Create a new HTTP server with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP server.
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(self, files: FileService) -> ServerResult<()> {
        let addr = self.address();
        let app = router(files, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Files:  GET /files?p=<path>");
        info!("  → Health: GET /health");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the application router.
pub fn router(files: FileService, enable_cors: bool) -> Router {
    let state = AppState { files };

    let mut app = Router::new()
        .route("/files", get(get_file))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Root handler - provides API info.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "staticguard",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "files": "/files?p=<path>",
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Serve a validated file read.
///
/// The fragment is opaque untrusted input. The response never contains it:
/// rejections and misses both answer with fixed generic bodies.
#[instrument(skip_all)]
async fn get_file(State(state): State<AppState>, Query(query): Query<FileQuery>) -> Response {
    match state.files.read(&query.p).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/octet-stream")],
            Body::from(Bytes::from(bytes)),
        )
            .into_response(),
        Err(FileAccessError::Denied(_)) => error_response(StatusCode::FORBIDDEN, "Access Denied"),
        Err(FileAccessError::NotFound) => error_response(StatusCode::NOT_FOUND, "File not found"),
        Err(FileAccessError::Io(e)) => {
            warn!("File read failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Build a fixed JSON error body.
fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
