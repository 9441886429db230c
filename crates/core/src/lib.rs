//! Shared domain types for the campus portal backend.
//!
//! This crate has no internal dependencies so it can be used by the
//! persistence layer, the upstream-service clients, and the API server
//! alike.

pub mod audit;
pub mod error;
pub mod identity;
pub mod roles;
pub mod types;
