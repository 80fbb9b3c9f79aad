//! Application state shared across handlers

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;

use linkhub_core::services::ProjectService;

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectService>,
    pub jwt: JwtVerifier,
}

/// Verifies bearer tokens issued by the external session service.
/// HS256 with a shared secret; issuance lives outside this service.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn decode(&self, token: &str) -> Result<crate::auth::Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<crate::auth::Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
}
