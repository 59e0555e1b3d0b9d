//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        bookings::{BookingsService, PgBookingsService},
        customers::{CustomersService, PgCustomersService},
        memberships::{MembershipsService, PgMembershipsService},
        payments::{PaymentsService, PgPaymentsService},
        reports::{PgReportsService, ReportsService},
        rooms::{PgRoomsService, RoomsService},
        tenants::{PgTenantsService, TenantsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("database role can bypass row-level security")]
    RlsBypassingRole,
}

#[derive(Clone)]
pub struct AppContext {
    pub tenants: Arc<dyn TenantsService>,
    pub memberships: Arc<dyn MembershipsService>,
    pub rooms: Arc<dyn RoomsService>,
    pub customers: Arc<dyn CustomersService>,
    pub bookings: Arc<dyn BookingsService>,
    pub payments: Arc<dyn PaymentsService>,
    pub reports: Arc<dyn ReportsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Refuses to start when the connected role is exempt from row-level
    /// security, since such a role would see every tenant's rows.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails or when
    /// the connected role can bypass row-level security.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if !database::rls_enforced_for_current_role(&pool)
            .await
            .map_err(AppInitError::Database)?
        {
            return Err(AppInitError::RlsBypassingRole);
        }

        let db = Db::new(pool.clone());

        Ok(Self {
            tenants: Arc::new(PgTenantsService::new(pool.clone())),
            memberships: Arc::new(PgMembershipsService::new(pool.clone())),
            rooms: Arc::new(PgRoomsService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            bookings: Arc::new(PgBookingsService::new(db.clone())),
            payments: Arc::new(PgPaymentsService::new(db.clone())),
            reports: Arc::new(PgReportsService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
