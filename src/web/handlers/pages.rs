// Page handlers for HTML rendering with Askama

use axum::{
    extract::State,
    response::Html,
};

use crate::api_server::AppState;
use crate::error::AppError;

// ============================================================================
// Home Page
// ============================================================================

/// `GET /`. Takes no input; query strings are ignored.
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let body = state.renderer.render_landing()?;
    Ok(Html(body))
}
