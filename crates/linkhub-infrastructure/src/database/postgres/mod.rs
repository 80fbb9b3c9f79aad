//! PostgreSQL repository implementations

pub mod project_repo_impl;

pub use project_repo_impl::PgProjectRepository;
