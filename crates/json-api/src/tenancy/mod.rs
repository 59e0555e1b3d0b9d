//! Tenant scoping

pub(crate) mod middleware;
