//! Domain services (business logic)

pub mod project_service;
pub mod slug_policy;

pub use project_service::{
    CreateProjectInput, CreateProjectOutcome, ProjectService, ProvisionReport, SettledOutcome,
};
pub use slug_policy::{SlugPolicy, SlugViolation};
