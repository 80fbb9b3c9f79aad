// ============================================================================
// LinkHub Infrastructure - PostgreSQL Project Repository
// File: crates/linkhub-infrastructure/src/database/postgres/project_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use tracing::error;
use uuid::Uuid;

use linkhub_core::domain::{
    MemberRole, NewProject, Plan, Project, ProjectDomain, ProjectWithDomains, ProvisioningStatus,
};
use linkhub_core::error::DomainError;
use linkhub_core::ports::ProjectRepository;

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub plan: String,
    pub billing_cycle_start: i16,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            slug: row.slug,
            plan: Plan::from(row.plan),
            billing_cycle_start: row.billing_cycle_start,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct ProjectDomainRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub slug: String,
    pub primary: bool,
    pub provisioning_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectDomainRow> for ProjectDomain {
    fn from(row: ProjectDomainRow) -> Self {
        ProjectDomain {
            id: row.id,
            project_id: row.project_id,
            slug: row.slug,
            primary: row.primary,
            provisioning_status: ProvisioningStatus::from_str(&row.provisioning_status)
                .unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

/// Maps a unique-constraint violation to the same structured error the
/// application-level pre-check produces, so a lost check-then-write race
/// is indistinguishable to the caller from an early rejection.
fn translate_unique_violation(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("projects_slug_key") => DomainError::SlugTaken,
        Some("project_domains_slug_key") => DomainError::DomainTaken,
        other => DomainError::DatabaseError(format!(
            "unique violation on constraint {:?}",
            other
        )),
    }
}

fn map_db_error(e: sqlx::Error, context: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some("23505") {
            return translate_unique_violation(db_err.constraint());
        }
    }
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError> {
        let row: Option<ProjectRow> = sqlx::query_as(
            r#"
            SELECT id, name, slug, plan, billing_cycle_start, created_at
            FROM projects
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "finding project by slug"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn domain_exists(&self, domain: &str) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM project_domains WHERE slug = $1)"#,
        )
        .bind(domain)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "checking domain existence"))?;

        Ok(exists)
    }

    async fn create_project(&self, new_project: &NewProject) -> Result<Project, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "starting create transaction"))?;

        let row: ProjectRow = sqlx::query_as(
            r#"
            INSERT INTO projects (id, name, slug, plan, billing_cycle_start)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, slug, plan, billing_cycle_start, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_project.name)
        .bind(&new_project.slug)
        .bind(Plan::default().as_str())
        .bind(new_project.billing_cycle_start)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "inserting project"))?;

        sqlx::query(
            r#"
            INSERT INTO project_users (project_id, user_id, role)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(row.id)
        .bind(new_project.owner_user_id)
        .bind(MemberRole::Owner.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "inserting owner membership"))?;

        sqlx::query(
            r#"
            INSERT INTO project_domains (id, project_id, slug, "primary", provisioning_status)
            VALUES ($1, $2, $3, TRUE, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(row.id)
        .bind(&new_project.domain)
        .bind(ProvisioningStatus::Pending.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "inserting primary domain"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "committing create transaction"))?;

        Ok(row.into())
    }

    async fn set_domain_status(
        &self,
        domain: &str,
        status: ProvisioningStatus,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"UPDATE project_domains SET provisioning_status = $2 WHERE slug = $1"#,
        )
        .bind(domain)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "updating provisioning status"))?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<ProjectWithDomains>, DomainError> {
        let project_rows: Vec<ProjectRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.name, p.slug, p.plan, p.billing_cycle_start, p.created_at
            FROM projects p
            INNER JOIN project_users pu ON pu.project_id = p.id
            WHERE pu.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "listing projects for user"))?;

        let project_ids: Vec<Uuid> = project_rows.iter().map(|p| p.id).collect();
        let domain_rows: Vec<ProjectDomainRow> = sqlx::query_as(
            r#"
            SELECT id, project_id, slug, "primary", provisioning_status, created_at
            FROM project_domains
            WHERE project_id = ANY($1)
            "#,
        )
        .bind(&project_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "listing project domains"))?;

        let mut domains_by_project: HashMap<Uuid, Vec<ProjectDomain>> = HashMap::new();
        for row in domain_rows {
            domains_by_project
                .entry(row.project_id)
                .or_default()
                .push(row.into());
        }

        Ok(project_rows
            .into_iter()
            .map(|row| {
                let domains = domains_by_project.remove(&row.id).unwrap_or_default();
                ProjectWithDomains {
                    project: row.into(),
                    domains,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_on_project_slug() {
        assert!(matches!(
            translate_unique_violation(Some("projects_slug_key")),
            DomainError::SlugTaken
        ));
    }

    #[test]
    fn test_unique_violation_on_domain_slug() {
        assert!(matches!(
            translate_unique_violation(Some("project_domains_slug_key")),
            DomainError::DomainTaken
        ));
    }

    #[test]
    fn test_unknown_constraint_stays_a_database_error() {
        assert!(matches!(
            translate_unique_violation(Some("project_users_pkey")),
            DomainError::DatabaseError(_)
        ));
        assert!(matches!(
            translate_unique_violation(None),
            DomainError::DatabaseError(_)
        ));
    }
}
