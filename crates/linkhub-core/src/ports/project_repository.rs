//! Project repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewProject, Project, ProjectWithDomains, ProvisioningStatus};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Exact-match lookup. Case-sensitive: Postgres `text` equality under
    /// the default collation does not fold case.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError>;

    /// True when a domain row with this name already exists.
    async fn domain_exists(&self, domain: &str) -> Result<bool, DomainError>;

    /// Creates the project row, the owner membership, and the primary
    /// domain row as one transaction. A unique-constraint violation is
    /// translated to `SlugTaken` / `DomainTaken` so a lost
    /// check-then-write race surfaces the same error the pre-check would
    /// have produced.
    async fn create_project(&self, new_project: &NewProject) -> Result<Project, DomainError>;

    /// Records the provider registration outcome on a domain row.
    async fn set_domain_status(
        &self,
        domain: &str,
        status: ProvisioningStatus,
    ) -> Result<(), DomainError>;

    /// All projects where the user holds any membership role, each with
    /// its domain rows. No pagination or ordering contract.
    async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<ProjectWithDomains>, DomainError>;
}
