//! Candy collection routes. Note the edit route keeps its `/edit` suffix.

use crate::handlers::candy::{create, delete as delete_handler, edit, list, read};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn candy_routes(state: AppState) -> Router {
    Router::new()
        .route("/candies", get(list).post(create))
        .route("/candies/:id", get(read).delete(delete_handler))
        .route("/candies/:id/edit", put(edit))
        .with_state(state)
}
