// ============================================================================
// LinkHub Infrastructure - Edge Config Client
// File: crates/linkhub-infrastructure/src/edge_config.rs
// Description: Reserved-key lookup against the remote configuration store
// ============================================================================

use async_trait::async_trait;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, error};

use linkhub_core::error::DomainError;
use linkhub_core::ports::ReservedKeyStore;
use linkhub_shared::config::EdgeConfigSettings;

struct CachedKeys {
    fetched_at: Instant,
    keys: HashSet<String>,
}

/// Reserved-key store backed by a remote edge-config endpoint.
///
/// The key set changes rarely, so responses are cached in process for a
/// configurable TTL. The cache is per instance; invalidation is restart
/// or TTL expiry.
pub struct EdgeConfigClient {
    http: reqwest::Client,
    url: String,
    token: String,
    ttl: Duration,
    cache: RwLock<Option<CachedKeys>>,
}

impl EdgeConfigClient {
    pub fn new(settings: &EdgeConfigSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: settings.url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            ttl: Duration::from_secs(settings.cache_ttl_secs),
            cache: RwLock::new(None),
        }
    }

    async fn fetch_keys(&self) -> Result<HashSet<String>, DomainError> {
        let url = format!("{}/item/reserved_keys", self.url);
        let keys: Vec<String> = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| {
                error!("Reserved-key fetch failed: {}", e);
                DomainError::ReservedKeyLookupError(e.to_string())
            })?
            .error_for_status()
            .map_err(|e| DomainError::ReservedKeyLookupError(e.to_string()))?
            .json()
            .await
            .map_err(|e| DomainError::ReservedKeyLookupError(e.to_string()))?;

        debug!(count = keys.len(), "Fetched reserved keys");
        Ok(keys.into_iter().collect())
    }
}

#[async_trait]
impl ReservedKeyStore for EdgeConfigClient {
    async fn is_reserved(&self, key: &str) -> Result<bool, DomainError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < self.ttl {
                    return Ok(cached.keys.contains(key));
                }
            }
        }

        let keys = self.fetch_keys().await?;
        let reserved = keys.contains(key);
        let mut cache = self.cache.write().await;
        *cache = Some(CachedKeys {
            fetched_at: Instant::now(),
            keys,
        });
        Ok(reserved)
    }
}
