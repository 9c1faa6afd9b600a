//! Extract a candy from the request body, JSON or form-encoded.

use crate::candy::Candy;
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};

/// Candy parsed from `application/json` or `application/x-www-form-urlencoded`.
#[derive(Clone, Debug)]
pub struct CandyBody(pub Candy);

#[async_trait]
impl<S> FromRequest<S> for CandyBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(candy) = Json::<Candy>::from_request(req, state)
                .await
                .map_err(|e| rejection(e.status(), e.body_text()))?;
            return Ok(CandyBody(candy));
        }
        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(candy) = Form::<Candy>::from_request(req, state)
                .await
                .map_err(|e| rejection(e.status(), e.body_text()))?;
            return Ok(CandyBody(candy));
        }
        Err(AppError::UnsupportedMediaType(if content_type.is_empty() {
            "missing content-type".into()
        } else {
            content_type
        }))
    }
}

fn rejection(status: StatusCode, text: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(text)
    }
}

