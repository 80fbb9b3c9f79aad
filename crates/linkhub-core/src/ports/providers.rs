//! External collaborator traits (ports)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Reserved-key configuration lookup. Injected rather than read from a
/// global so tests can substitute it; implementations may suspend (remote
/// config fetch) and may cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservedKeyStore: Send + Sync {
    async fn is_reserved(&self, key: &str) -> Result<bool, DomainError>;
}

/// Result of validating a candidate domain. An `Invalid` message is
/// forwarded verbatim to the caller as `domainError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainCheck {
    Valid,
    Invalid(String),
}

/// Syntactic/semantic domain validation. The checking logic is an opaque
/// external collaborator; the contract is only `Valid` or a message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainValidator: Send + Sync {
    async fn validate(&self, domain: &str) -> Result<DomainCheck, DomainError>;
}

/// Outcome of registering a domain with the hosting provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRegistration {
    pub name: String,
    pub verified: bool,
}

/// Domain registration with the external hosting/DNS provider. Independent
/// failure domain from the store write; callers collect both outcomes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainProvisioner: Send + Sync {
    async fn add_domain(&self, domain: &str) -> Result<DomainRegistration, DomainError>;
}
