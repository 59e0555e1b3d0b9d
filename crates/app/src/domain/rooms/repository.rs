//! Rooms Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::rooms::{
    data::{NewRoom, RoomUpdate},
    records::{RoomRecord, RoomUuid},
};

const CREATE_ROOM_SQL: &str = include_str!("sql/create_room.sql");
const FIND_ROOM_SQL: &str = include_str!("sql/find_room.sql");
const LIST_ROOMS_SQL: &str = include_str!("sql/list_rooms.sql");
const UPDATE_ROOM_SQL: &str = include_str!("sql/update_room.sql");

fn rate_to_i64(rate_cents: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(rate_cents).map_err(|e| sqlx::Error::ColumnDecode {
        index: "rate_cents".to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRoomsRepository;

impl PgRoomsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: &NewRoom,
    ) -> Result<RoomRecord, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(CREATE_ROOM_SQL)
            .bind(room.uuid.into_uuid())
            .bind(&room.number)
            .bind(&room.room_type)
            .bind(rate_to_i64(room.rate_cents)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: RoomUuid,
    ) -> Result<Option<RoomRecord>, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(FIND_ROOM_SQL)
            .bind(room.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_rooms(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<RoomRecord>, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(LIST_ROOMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: RoomUuid,
        update: &RoomUpdate,
    ) -> Result<Option<RoomRecord>, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(UPDATE_ROOM_SQL)
            .bind(room.into_uuid())
            .bind(&update.room_type)
            .bind(rate_to_i64(update.rate_cents)?)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RoomRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rate_i64: i64 = row.try_get("rate_cents")?;

        let rate_cents = u64::try_from(rate_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "rate_cents".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: RoomUuid::from_uuid(row.try_get("uuid")?),
            number: row.try_get("number")?,
            room_type: row.try_get("room_type")?,
            rate_cents,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
