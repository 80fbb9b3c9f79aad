// ============================================================================
// LinkHub API - Project Handlers
// File: crates/linkhub-api/src/handlers/projects.rs
// ============================================================================
//! Project HTTP handlers (list, create)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::Session;
use crate::dto::{CreateProjectRequest, ProjectDto};
use crate::response::{internal_error, ErrorBody, ValidationErrors};
use crate::state::AppState;
use linkhub_core::services::{CreateProjectInput, CreateProjectOutcome};

/// List handler - GET /api/v1/projects
///
/// All projects the authenticated user belongs to, domains included.
pub async fn list_projects(State(state): State<AppState>, session: Session) -> Response {
    match state.projects.list(&session.user_id).await {
        Ok(projects) => {
            let body: Vec<ProjectDto> = projects.into_iter().map(ProjectDto::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// Create handler - POST /api/v1/projects
///
/// Validation failures are 422 with `{slugError, domainError}`. Once
/// validation passes, the response is 200 with both provisioning outcomes
/// reported individually, whether or not they succeeded.
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProjectRequest>,
) -> Response {
    let Some((name, slug, domain)) = payload.required_fields() else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: "Missing name or slug or domain".to_string(),
            }),
        )
            .into_response();
    };

    let outcome = state
        .projects
        .create(session.user_id, CreateProjectInput { name, slug, domain })
        .await;

    match outcome {
        Ok(CreateProjectOutcome::Rejected {
            slug_error,
            domain_error,
        }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrors {
                slug_error,
                domain_error,
            }),
        )
            .into_response(),
        Ok(CreateProjectOutcome::Provisioned(report)) => {
            // Two-entry array of settled outcomes, mirroring the
            // provisioning pair: [project, domain registration].
            (
                StatusCode::OK,
                Json((report.project, report.registration)),
            )
                .into_response()
        }
        Err(e) => internal_error(e),
    }
}
