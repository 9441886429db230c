//! Request extractors: identity resolution, role gates, client metadata.

pub mod client_meta;
pub mod identity;
pub mod rbac;
