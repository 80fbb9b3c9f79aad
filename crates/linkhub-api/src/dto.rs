//! Request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use linkhub_core::domain::{Plan, PlanBadge, ProjectDomain, ProjectWithDomains};

/// Creation payload. All three fields are required; absence and empty
/// strings are both treated as missing.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl CreateProjectRequest {
    /// Returns (name, slug, domain) when all fields are present and
    /// non-empty.
    pub fn required_fields(&self) -> Option<(String, String, String)> {
        let take = |field: &Option<String>| {
            field
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Some((take(&self.name)?, take(&self.slug)?, take(&self.domain)?))
    }
}

/// Project as returned by the read path: the record, its domains, and the
/// presentational badge for its plan.
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub plan: Plan,
    pub badge: PlanBadge,
    #[serde(rename = "billingCycleStart")]
    pub billing_cycle_start: i16,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub domains: Vec<ProjectDomain>,
}

impl From<ProjectWithDomains> for ProjectDto {
    fn from(value: ProjectWithDomains) -> Self {
        let project = value.project;
        Self {
            id: project.id,
            name: project.name,
            slug: project.slug,
            plan: project.plan,
            badge: project.plan.badge(),
            billing_cycle_start: project.billing_cycle_start,
            created_at: project.created_at,
            domains: value.domains,
        }
    }
}
