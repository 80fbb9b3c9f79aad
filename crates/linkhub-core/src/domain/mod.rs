//! # LinkHub Core - Domain Module
//!
//! Domain entities for the link-management application.

pub mod membership;
pub mod plan;
pub mod project;
pub mod project_domain;

// Re-export all entities and enums
pub use membership::{MemberRole, ProjectMembership};
pub use plan::{BadgeVariant, Plan, PlanBadge};
pub use project::{NewProject, Project, ProjectWithDomains};
pub use project_domain::{ProjectDomain, ProvisioningStatus};
