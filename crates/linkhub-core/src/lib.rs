//! # LinkHub Core
//!
//! Domain entities, services, and repository/provider traits for the
//! link-management application.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
