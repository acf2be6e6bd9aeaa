// Axum server module
//
// Serves the landing page at `/` plus a health check, a JSON view of the
// page model and the stylesheet.

use axum::{
    http::Uri,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::page::LANDING_PAGE;
use crate::render::PageRenderer;
use crate::web::handlers::home_page;
use crate::widgets::HtmlWidgets;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer<HtmlWidgets>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!("Initializing page renderer...");
        Self {
            renderer: Arc::new(PageRenderer::new(HtmlWidgets)),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Landing page (HTML)
        .route("/", get(home_page))

        // Health check
        .route("/health", get(health_check))

        // Page model (JSON)
        .route("/api/landing", get(landing_model))

        // Stylesheet
        .nest_service("/static", static_files)

        // /browse, /dashboard and /admin live elsewhere in the application
        .fallback(not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn landing_model() -> impl IntoResponse {
    Json(LANDING_PAGE)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No route for {}", uri.path());
    AppError::NotFound(uri.path().to_string())
}

// ============================================================================
// Shutdown
// ============================================================================

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
