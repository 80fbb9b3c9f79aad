// ============================================================================
// LinkHub Core - Project Entity
// File: crates/linkhub-core/src/domain/project.rs
// Description: Tenant workspace entity with plan and billing metadata
// ============================================================================

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::plan::Plan;
use super::project_domain::ProjectDomain;
use crate::error::DomainError;

/// Project entity (tenant workspace)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,

    /// Globally unique, URL-safe identifier. Stored exactly as submitted;
    /// lookups are exact-match (case-sensitive under Postgres `text` `=`).
    pub slug: String,

    pub plan: Plan,

    /// Day of month (1-31) captured at creation time. Months shorter than
    /// this value have no defined billing behavior yet; any policy for
    /// short months must be decided before this field drives invoicing.
    pub billing_cycle_start: i16,

    pub created_at: DateTime<Utc>,
}

/// Project together with its domain records, as returned by the read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWithDomains {
    #[serde(flatten)]
    pub project: Project,
    pub domains: Vec<ProjectDomain>,
}

/// Validated input for creating a project with its primary domain.
#[derive(Debug, Clone, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 140, message = "Project name must be between 1 and 140 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 48, message = "Slug must be less than 48 characters"))]
    pub slug: String,

    #[validate(length(min = 1, max = 253, message = "Domain must be a valid DNS name"))]
    pub domain: String,

    pub owner_user_id: Uuid,
    pub billing_cycle_start: i16,
}

impl NewProject {
    pub fn new(
        name: String,
        slug: String,
        domain: String,
        owner_user_id: Uuid,
    ) -> Result<Self, DomainError> {
        let new_project = Self {
            name: name.trim().to_string(),
            slug,
            domain: domain.trim().to_string(),
            owner_user_id,
            billing_cycle_start: Utc::now().day() as i16,
        };

        new_project
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(new_project)
    }
}
