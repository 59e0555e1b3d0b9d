//! Reports service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        reports::{
            errors::ReportsServiceError,
            records::{OccupancyReport, RevenueReport},
            repository::PgReportsRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn occupancy(
        &self,
        tenant: TenantUuid,
        on_date: Date,
    ) -> Result<OccupancyReport, ReportsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let report = self.repository.occupancy(&mut tx, on_date).await?;

        tx.commit().await?;

        Ok(report)
    }

    async fn revenue(&self, tenant: TenantUuid) -> Result<RevenueReport, ReportsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let report = self.repository.revenue(&mut tx).await?;

        tx.commit().await?;

        Ok(report)
    }
}

#[automock]
#[async_trait]
/// Aggregate reports over a tenant's data.
pub trait ReportsService: Send + Sync {
    /// Room occupancy for a single day, derived from CHECKED_IN bookings.
    async fn occupancy(
        &self,
        tenant: TenantUuid,
        on_date: Date,
    ) -> Result<OccupancyReport, ReportsServiceError>;

    /// Total and count of all recorded payments.
    async fn revenue(&self, tenant: TenantUuid) -> Result<RevenueReport, ReportsServiceError>;
}
