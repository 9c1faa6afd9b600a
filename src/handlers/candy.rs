//! Candy handlers: list, create, read, delete, edit.

use crate::error::AppError;
use crate::extractors::CandyBody;
use crate::response::Deleted;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let candies = state.read().list().to_vec();
    tracing::debug!(count = candies.len(), "list candies");
    (StatusCode::OK, Json(candies))
}

pub async fn create(
    State(state): State<AppState>,
    CandyBody(candy): CandyBody,
) -> Result<impl IntoResponse, AppError> {
    let created = state.write().create(candy);
    tracing::info!(id = created.id, name = %created.name, "candy created");
    Ok((StatusCode::OK, Json(created)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let candy = state
        .read()
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("candy {}", id)))?;
    tracing::debug!(id, "read candy");
    Ok((StatusCode::OK, Json(candy)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let removed = state.write().delete(id);
    let Some(candy) = removed else {
        tracing::warn!(id, "delete of unknown candy");
        return Err(AppError::NotFound(format!("candy {}", id)));
    };
    tracing::info!(id, "candy deleted");
    Ok((StatusCode::OK, Json(Deleted::new(candy))))
}

/// Full replacement. The body id must match the path id.
pub async fn edit(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    CandyBody(candy): CandyBody,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if candy.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {}",
            candy.id, id
        )));
    }
    let replaced = state.write().replace(id, candy);
    if replaced.matched == 0 {
        tracing::warn!(id, "edit of unknown candy");
        return Err(AppError::NotFound(format!("candy {}", id)));
    }
    tracing::info!(id, matched = replaced.matched, "candy replaced");
    Ok((StatusCode::OK, Json(replaced.candy)))
}
