//! Reports Repository

use jiff::civil::Date;
use jiff_sqlx::Date as SqlxDate;
use sqlx::{Postgres, Row, Transaction, postgres::PgRow, query};

use crate::domain::reports::records::{OccupancyReport, RevenueReport};

const OCCUPANCY_SQL: &str = include_str!("sql/occupancy.sql");
const REVENUE_SQL: &str = include_str!("sql/revenue.sql");

fn count_from(row: &PgRow, column: &str) -> Result<u64, sqlx::Error> {
    let value: i64 = row.try_get(column)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn occupancy(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        on_date: Date,
    ) -> Result<OccupancyReport, sqlx::Error> {
        let row = query::<Postgres>(OCCUPANCY_SQL)
            .bind(SqlxDate::from(on_date))
            .fetch_one(&mut **tx)
            .await?;

        Ok(OccupancyReport {
            on_date,
            total_rooms: count_from(&row, "total_rooms")?,
            occupied_rooms: count_from(&row, "occupied_rooms")?,
        })
    }

    pub(crate) async fn revenue(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<RevenueReport, sqlx::Error> {
        let row = query::<Postgres>(REVENUE_SQL).fetch_one(&mut **tx).await?;

        Ok(RevenueReport {
            total_cents: count_from(&row, "total_cents")?,
            payment_count: count_from(&row, "payment_count")?,
        })
    }
}
