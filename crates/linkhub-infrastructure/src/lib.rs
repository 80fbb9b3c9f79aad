//! # LinkHub Infrastructure
//!
//! Postgres repositories and HTTP clients for the external collaborators
//! (hosting provider, reserved-key configuration store).

pub mod database;
pub mod edge_config;
pub mod vercel;
