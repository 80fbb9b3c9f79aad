// ============================================================================
// LinkHub Core - Project Service
// File: crates/linkhub-core/src/services/project_service.rs
// ============================================================================
//! Project creation orchestration and listing

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{NewProject, Project, ProjectWithDomains, ProvisioningStatus};
use crate::error::DomainError;
use crate::ports::{
    DomainCheck, DomainProvisioner, DomainRegistration, DomainValidator, ProjectRepository,
};
use crate::services::slug_policy::SlugPolicy;

/// Raw creation input. Field presence is the transport layer's concern;
/// the service assumes non-empty strings.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub name: String,
    pub slug: String,
    pub domain: String,
}

/// Per-operation result of the provisioning phase, mirroring a settled
/// promise: either the materialized value or the failure reason.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SettledOutcome<T: serde::Serialize> {
    Fulfilled { value: T },
    Rejected { reason: String },
}

impl<T: serde::Serialize> From<Result<T, DomainError>> for SettledOutcome<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => SettledOutcome::Fulfilled { value },
            Err(e) => SettledOutcome::Rejected {
                reason: e.to_string(),
            },
        }
    }
}

impl<T: serde::Serialize> SettledOutcome<T> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, SettledOutcome::Fulfilled { .. })
    }
}

/// Both provisioning outcomes, reported individually. The store write and
/// the provider registration are not atomic; the caller inspects which
/// parts succeeded.
#[derive(Debug, serde::Serialize)]
pub struct ProvisionReport {
    pub project: SettledOutcome<Project>,
    pub registration: SettledOutcome<DomainRegistration>,
}

/// Outcome of a creation attempt after input parsing.
#[derive(Debug)]
pub enum CreateProjectOutcome {
    /// Validation or uniqueness rejected the request; either field may be
    /// absent. Terminal, no mutation happened.
    Rejected {
        slug_error: Option<String>,
        domain_error: Option<String>,
    },
    /// Validation passed and both provisioning operations ran to
    /// completion, each with its own outcome.
    Provisioned(ProvisionReport),
}

/// Orchestrates project creation: format validation, uniqueness checks,
/// then the store write and provider registration. Phases are strictly
/// sequential; operations within a phase run concurrently and both must
/// complete before the next phase starts.
pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
    validator: Arc<dyn DomainValidator>,
    provisioner: Arc<dyn DomainProvisioner>,
    slug_policy: SlugPolicy,
}

impl ProjectService {
    pub fn new(
        repo: Arc<dyn ProjectRepository>,
        validator: Arc<dyn DomainValidator>,
        provisioner: Arc<dyn DomainProvisioner>,
        slug_policy: SlugPolicy,
    ) -> Self {
        Self {
            repo,
            validator,
            provisioner,
            slug_policy,
        }
    }

    /// All projects the user belongs to, domains included.
    pub async fn list(&self, user_id: &Uuid) -> Result<Vec<ProjectWithDomains>, DomainError> {
        self.repo.list_for_user(user_id).await
    }

    /// Creates a project with its primary domain for `owner_user_id`.
    pub async fn create(
        &self,
        owner_user_id: Uuid,
        input: CreateProjectInput,
    ) -> Result<CreateProjectOutcome, DomainError> {
        info!(slug = %input.slug, domain = %input.domain, "Project creation attempt");

        // 1. Format validation: slug policy and domain validation are
        //    independent, run them together.
        let (slug_check, domain_check) = tokio::join!(
            self.slug_policy.check(&input.slug),
            self.validator.validate(&input.domain),
        );

        let slug_error = slug_check?.map(|v| v.message().to_string());
        let domain_error = match domain_check? {
            DomainCheck::Valid => None,
            // Forwarded verbatim to the caller as domainError
            DomainCheck::Invalid(message) => Some(message),
        };

        if slug_error.is_some() || domain_error.is_some() {
            warn!(?slug_error, ?domain_error, "Project creation rejected by validation");
            return Ok(CreateProjectOutcome::Rejected {
                slug_error,
                domain_error,
            });
        }

        // 2. Uniqueness: only reached once both formats are good, so cheap
        //    rejections never pay the store round-trips.
        let (slug_exists, domain_exists) = tokio::join!(
            self.repo.find_by_slug(&input.slug),
            self.repo.domain_exists(&input.domain),
        );

        let slug_taken = slug_exists?.is_some();
        let domain_taken = domain_exists?;
        if slug_taken || domain_taken {
            warn!(slug_taken, domain_taken, "Project creation rejected: already in use");
            return Ok(CreateProjectOutcome::Rejected {
                slug_error: slug_taken.then(|| DomainError::SlugTaken.to_string()),
                domain_error: domain_taken.then(|| DomainError::DomainTaken.to_string()),
            });
        }

        let new_project = NewProject::new(
            input.name,
            input.slug,
            input.domain.clone(),
            owner_user_id,
        )?;

        // 3. Provisioning: store write and provider registration are
        //    independent failure domains. Both outcomes are collected and
        //    reported; there is no rollback when only one side fails.
        let (created, registered) = tokio::join!(
            self.repo.create_project(&new_project),
            self.provisioner.add_domain(&input.domain),
        );

        // Record the provider outcome on the domain row when it exists.
        // A failure here is logged, not surfaced: the report already
        // carries both primary outcomes.
        if created.is_ok() {
            let status = if registered.is_ok() {
                ProvisioningStatus::Registered
            } else {
                ProvisioningStatus::Failed
            };
            if let Err(e) = self.repo.set_domain_status(&input.domain, status).await {
                warn!("Failed to record provisioning status: {}", e);
            }
        }

        if let Err(ref e) = registered {
            warn!("Domain registration failed: {}", e);
        }

        info!("Project provisioning completed");
        Ok(CreateProjectOutcome::Provisioned(ProvisionReport {
            project: created.into(),
            registration: registered.into(),
        }))
    }
}
