//! Router assembly.

mod candy;
mod common;
pub use candy::candy_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::Uri, Router};
use tower_http::trace::TraceLayer;

async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Full application: common and candy routes, body limit, request tracing.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(candy_routes(state))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
}
