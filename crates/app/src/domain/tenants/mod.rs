//! Tenant control plane.
//!
//! Tenant rows are the root of the isolation model. Every other tenant
//! table carries a `tenant_uuid` column whose row level security policy
//! points back here.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::TenantsServiceError;
pub use service::*;
