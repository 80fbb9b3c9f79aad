//! Session extraction from bearer tokens

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::response::ErrorBody;
use crate::state::AppState;

/// Token claims. `sub` carries the user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
}

/// Authenticated caller identity, extracted from the Authorization header.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub user_id: Uuid,
}

fn unauthorized() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: "Unauthorized".to_string(),
        }),
    )
}

impl FromRequestParts<AppState> for Session {
    type Rejection = (StatusCode, Json<ErrorBody>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

        let claims = state.jwt.decode(token).map_err(|_| unauthorized())?;
        Ok(Session {
            user_id: claims.sub,
        })
    }
}
