//! Project domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration state of a domain with the external hosting provider.
///
/// The store write and the provider registration are independent failure
/// domains; this status records the provider outcome so a reconciliation
/// sweep can retry `Failed` rows later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisioningStatus {
    Pending,
    Registered,
    Failed,
}

impl ProvisioningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProvisioningStatus::Pending => "pending",
            ProvisioningStatus::Registered => "registered",
            ProvisioningStatus::Failed => "failed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ProvisioningStatus::Pending),
            "registered" => Some(ProvisioningStatus::Registered),
            "failed" => Some(ProvisioningStatus::Failed),
            _ => None,
        }
    }
}

impl Default for ProvisioningStatus {
    fn default() -> Self {
        ProvisioningStatus::Pending
    }
}

/// A DNS name bound to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDomain {
    pub id: Uuid,
    pub project_id: Uuid,

    /// The domain string, globally unique across all projects.
    pub slug: String,

    /// True for the domain supplied at project creation.
    pub primary: bool,

    pub provisioning_status: ProvisioningStatus,
    pub created_at: DateTime<Utc>,
}
