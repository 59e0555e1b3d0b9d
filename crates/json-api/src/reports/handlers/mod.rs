//! Report Handlers

pub(crate) mod occupancy;
pub(crate) mod revenue;
