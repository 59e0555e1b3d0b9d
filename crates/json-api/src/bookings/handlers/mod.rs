//! Booking Handlers

pub(crate) mod cancel;
pub(crate) mod check_in;
pub(crate) mod check_out;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
