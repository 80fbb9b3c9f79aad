//! # LinkHub API
//!
//! HTTP handlers, DTOs, auth extraction, and the application router.

pub mod auth;
pub mod dto;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use router::router;
pub use state::AppState;
