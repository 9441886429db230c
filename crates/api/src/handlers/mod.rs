//! HTTP request handlers, one module per resource.

pub mod admin;
pub mod aggregate;
pub mod analytics;
pub mod auth;
pub mod business;
pub mod notification;
