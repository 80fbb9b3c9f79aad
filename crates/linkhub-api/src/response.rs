//! API response shapes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use linkhub_core::error::DomainError;

/// Single-message error body, e.g. the missing-field rejection.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Combined validation rejection. Field names are part of the public API
/// contract; either side may be null.
#[derive(Debug, Serialize)]
pub struct ValidationErrors {
    #[serde(rename = "slugError")]
    pub slug_error: Option<String>,
    #[serde(rename = "domainError")]
    pub domain_error: Option<String>,
}

/// Unexpected failures (store unreachable, etc.) surface as 500; client
/// input problems never reach this path.
pub fn internal_error(e: DomainError) -> Response {
    tracing::error!("Unhandled domain error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
