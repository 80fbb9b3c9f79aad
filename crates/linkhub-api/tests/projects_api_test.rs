//! Project endpoint tests: real router, mocked ports

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use mockall::mock;
use tower::util::ServiceExt;
use uuid::Uuid;

use linkhub_api::auth::Claims;
use linkhub_api::state::{AppState, JwtVerifier};
use linkhub_api::router;
use linkhub_core::domain::{
    NewProject, Plan, Project, ProjectDomain, ProjectWithDomains, ProvisioningStatus,
};
use linkhub_core::error::DomainError;
use linkhub_core::ports::{
    DomainCheck, DomainProvisioner, DomainRegistration, DomainValidator, ProjectRepository,
    ReservedKeyStore,
};
use linkhub_core::services::{ProjectService, SlugPolicy};

const SECRET: &str = "test-secret";

mock! {
    Repo {}
    #[async_trait]
    impl ProjectRepository for Repo {
        async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError>;
        async fn domain_exists(&self, domain: &str) -> Result<bool, DomainError>;
        async fn create_project(&self, new_project: &NewProject) -> Result<Project, DomainError>;
        async fn set_domain_status(
            &self,
            domain: &str,
            status: ProvisioningStatus,
        ) -> Result<(), DomainError>;
        async fn list_for_user(
            &self,
            user_id: &Uuid,
        ) -> Result<Vec<ProjectWithDomains>, DomainError>;
    }
}

mock! {
    Validator {}
    #[async_trait]
    impl DomainValidator for Validator {
        async fn validate(&self, domain: &str) -> Result<DomainCheck, DomainError>;
    }
}

mock! {
    Provisioner {}
    #[async_trait]
    impl DomainProvisioner for Provisioner {
        async fn add_domain(&self, domain: &str) -> Result<DomainRegistration, DomainError>;
    }
}

mock! {
    Reserved {}
    #[async_trait]
    impl ReservedKeyStore for Reserved {
        async fn is_reserved(&self, key: &str) -> Result<bool, DomainError>;
    }
}

fn sample_project(slug: &str) -> Project {
    Project {
        id: Uuid::new_v4(),
        name: "Acme".to_string(),
        slug: slug.to_string(),
        plan: Plan::default(),
        billing_cycle_start: 15,
        created_at: Utc::now(),
    }
}

fn app_state(
    repo: MockRepo,
    validator: MockValidator,
    provisioner: MockProvisioner,
    reserved: MockReserved,
) -> AppState {
    AppState {
        projects: Arc::new(ProjectService::new(
            Arc::new(repo),
            Arc::new(validator),
            Arc::new(provisioner),
            SlugPolicy::new(Arc::new(reserved)),
        )),
        jwt: JwtVerifier::new(SECRET),
    }
}

fn permissive_state() -> AppState {
    let mut repo = MockRepo::new();
    repo.expect_find_by_slug().returning(|_| Ok(None));
    repo.expect_domain_exists().returning(|_| Ok(false));
    repo.expect_create_project()
        .returning(|input| Ok(sample_project(&input.slug)));
    repo.expect_set_domain_status().returning(|_, _| Ok(()));
    repo.expect_list_for_user().returning(|_| Ok(vec![]));

    let mut validator = MockValidator::new();
    validator
        .expect_validate()
        .returning(|_| Ok(DomainCheck::Valid));

    let mut provisioner = MockProvisioner::new();
    provisioner.expect_add_domain().returning(|d| {
        Ok(DomainRegistration {
            name: d.to_string(),
            verified: false,
        })
    });

    let mut reserved = MockReserved::new();
    reserved.expect_is_reserved().returning(|_| Ok(false));

    app_state(repo, validator, provisioner, reserved)
}

fn bearer_token(user_id: Uuid) -> String {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn post_request(token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/projects")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_requires_session() {
    let response = router(permissive_state())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_rejects_missing_field() {
    let token = bearer_token(Uuid::new_v4());
    let response = router(permissive_state())
        .oneshot(post_request(
            &token,
            serde_json::json!({ "name": "Acme", "slug": "acme" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing name or slug or domain");
}

#[tokio::test]
async fn test_create_rejects_empty_field_as_missing() {
    let token = bearer_token(Uuid::new_v4());
    let response = router(permissive_state())
        .oneshot(post_request(
            &token,
            serde_json::json!({ "name": "Acme", "slug": "acme", "domain": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing name or slug or domain");
}

#[tokio::test]
async fn test_create_rejects_too_long_slug_with_null_domain_error() {
    let token = bearer_token(Uuid::new_v4());
    let slug = "a".repeat(49);
    let response = router(permissive_state())
        .oneshot(post_request(
            &token,
            serde_json::json!({ "name": "Acme", "slug": slug, "domain": "acme.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["slugError"], "Slug must be less than 48 characters");
    assert_eq!(body["domainError"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_rejects_taken_slug_and_domain() {
    let mut repo = MockRepo::new();
    repo.expect_find_by_slug()
        .returning(|slug| Ok(Some(sample_project(slug))));
    repo.expect_domain_exists().returning(|_| Ok(true));
    repo.expect_create_project().times(0);

    let mut validator = MockValidator::new();
    validator
        .expect_validate()
        .returning(|_| Ok(DomainCheck::Valid));

    let mut reserved = MockReserved::new();
    reserved.expect_is_reserved().returning(|_| Ok(false));

    let state = app_state(repo, validator, MockProvisioner::new(), reserved);

    let token = bearer_token(Uuid::new_v4());
    let response = router(state)
        .oneshot(post_request(
            &token,
            serde_json::json!({ "name": "Acme", "slug": "acme", "domain": "acme.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["slugError"], "Slug is already in use.");
    assert_eq!(body["domainError"], "Domain is already in use.");
}

#[tokio::test]
async fn test_create_returns_two_settled_outcomes() {
    let token = bearer_token(Uuid::new_v4());
    let response = router(permissive_state())
        .oneshot(post_request(
            &token,
            serde_json::json!({ "name": "Acme", "slug": "acme", "domain": "acme.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let outcomes = body.as_array().expect("outcome array");
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["status"], "fulfilled");
    assert_eq!(outcomes[0]["value"]["slug"], "acme");
    assert_eq!(outcomes[1]["status"], "fulfilled");
    assert_eq!(outcomes[1]["value"]["name"], "acme.com");
}

#[tokio::test]
async fn test_partial_provisioning_failure_still_returns_200() {
    let mut repo = MockRepo::new();
    repo.expect_find_by_slug().returning(|_| Ok(None));
    repo.expect_domain_exists().returning(|_| Ok(false));
    repo.expect_create_project()
        .returning(|input| Ok(sample_project(&input.slug)));
    repo.expect_set_domain_status().returning(|_, _| Ok(()));

    let mut validator = MockValidator::new();
    validator
        .expect_validate()
        .returning(|_| Ok(DomainCheck::Valid));

    let mut provisioner = MockProvisioner::new();
    provisioner
        .expect_add_domain()
        .returning(|_| Err(DomainError::ProviderError("rate limited".to_string())));

    let mut reserved = MockReserved::new();
    reserved.expect_is_reserved().returning(|_| Ok(false));

    let state = app_state(repo, validator, provisioner, reserved);

    let token = bearer_token(Uuid::new_v4());
    let response = router(state)
        .oneshot(post_request(
            &token,
            serde_json::json!({ "name": "Acme", "slug": "acme", "domain": "acme.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["status"], "fulfilled");
    assert_eq!(body[1]["status"], "rejected");
    assert!(body[1]["reason"]
        .as_str()
        .unwrap()
        .contains("rate limited"));
}

#[tokio::test]
async fn test_list_returns_projects_with_primary_domain_and_badge() {
    let user_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    let mut repo = MockRepo::new();
    repo.expect_list_for_user()
        .withf(move |id| *id == user_id)
        .returning(move |_| {
            let project = sample_project("acme");
            Ok(vec![ProjectWithDomains {
                project: Project {
                    id: project_id,
                    ..project
                },
                domains: vec![ProjectDomain {
                    id: Uuid::new_v4(),
                    project_id,
                    slug: "acme.com".to_string(),
                    primary: true,
                    provisioning_status: ProvisioningStatus::Registered,
                    created_at: Utc::now(),
                }],
            }])
        });

    let mut reserved = MockReserved::new();
    reserved.expect_is_reserved().returning(|_| Ok(false));

    let state = app_state(
        repo,
        MockValidator::new(),
        MockProvisioner::new(),
        reserved,
    );

    let token = bearer_token(user_id);
    let response = router(state)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/projects")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let projects = body.as_array().expect("project array");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["slug"], "acme");
    assert_eq!(projects[0]["domains"][0]["primary"], true);
    assert_eq!(projects[0]["badge"]["variant"], "black");
}

#[tokio::test]
async fn test_unsupported_method_gets_405_with_allow_header() {
    let token = bearer_token(Uuid::new_v4());
    let response = router(permissive_state())
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/projects")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response
        .headers()
        .get(header::ALLOW)
        .expect("Allow header")
        .to_str()
        .unwrap();
    assert!(allow.contains("GET"));
    assert!(allow.contains("POST"));
}
