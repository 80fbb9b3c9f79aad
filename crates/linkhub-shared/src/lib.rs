//! # LinkHub Shared
//!
//! Configuration, telemetry, and application-wide constants.

pub mod config;
pub mod constants;
pub mod telemetry;
