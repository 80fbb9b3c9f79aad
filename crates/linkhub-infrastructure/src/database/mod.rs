//! Database access

pub mod connection;
pub mod postgres;
