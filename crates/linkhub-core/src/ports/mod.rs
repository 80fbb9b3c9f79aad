//! Repository and provider traits (ports)

pub mod project_repository;
pub mod providers;

pub use project_repository::ProjectRepository;
pub use providers::{DomainCheck, DomainProvisioner, DomainRegistration, DomainValidator, ReservedKeyStore};
