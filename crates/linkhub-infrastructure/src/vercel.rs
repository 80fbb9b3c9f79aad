// ============================================================================
// LinkHub Infrastructure - Vercel Domain Client
// File: crates/linkhub-infrastructure/src/vercel.rs
// Description: Domain validation and registration against the hosting provider
// ============================================================================

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::{error, info};

use linkhub_core::error::DomainError;
use linkhub_core::ports::{DomainCheck, DomainProvisioner, DomainRegistration, DomainValidator};
use linkhub_shared::config::VercelSettings;

static VALID_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("valid domain pattern")
});

/// Apexes that cannot be claimed as custom domains.
const RESTRICTED_SUFFIXES: &[&str] = &[".vercel.app", ".linkhub.sh"];

pub struct VercelDomainClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
    project_id: String,
}

impl VercelDomainClient {
    pub fn new(settings: &VercelSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            project_id: settings.project_id.clone(),
        }
    }
}

#[async_trait]
impl DomainValidator for VercelDomainClient {
    async fn validate(&self, domain: &str) -> Result<DomainCheck, DomainError> {
        if !VALID_DOMAIN.is_match(domain) {
            return Ok(DomainCheck::Invalid("Invalid domain".to_string()));
        }
        if RESTRICTED_SUFFIXES.iter().any(|s| domain.ends_with(s)) {
            return Ok(DomainCheck::Invalid(
                "Cannot use this domain as your custom domain".to_string(),
            ));
        }
        Ok(DomainCheck::Valid)
    }
}

#[derive(Debug, Deserialize)]
struct AddDomainResponse {
    name: String,
    #[serde(default)]
    verified: bool,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    code: String,
    message: Option<String>,
}

#[async_trait]
impl DomainProvisioner for VercelDomainClient {
    async fn add_domain(&self, domain: &str) -> Result<DomainRegistration, DomainError> {
        let url = format!(
            "{}/v10/projects/{}/domains",
            self.api_url, self.project_id
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "name": domain }))
            .send()
            .await
            .map_err(|e| {
                error!("Provider request failed for {}: {}", domain, e);
                DomainError::ProviderError(e.to_string())
            })?;

        if response.status().is_success() {
            let body: AddDomainResponse = response
                .json()
                .await
                .map_err(|e| DomainError::ProviderError(e.to_string()))?;
            info!(domain = %body.name, verified = body.verified, "Domain registered with provider");
            return Ok(DomainRegistration {
                name: body.name,
                verified: body.verified,
            });
        }

        let status = response.status();
        let message = match response.json::<ProviderErrorBody>().await {
            Ok(body) => body.error.message.unwrap_or(body.error.code),
            Err(_) => format!("provider returned {}", status),
        };
        error!("Provider rejected domain {}: {}", domain, message);
        Err(DomainError::ProviderError(message))
    }
}
