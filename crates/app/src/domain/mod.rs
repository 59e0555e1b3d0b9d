//! Innkeep Domain Concerns

pub mod bookings;
pub mod customers;
pub mod memberships;
pub mod payments;
pub mod reports;
pub mod rooms;
pub mod tenants;
