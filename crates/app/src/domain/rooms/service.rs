//! Rooms service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        rooms::{
            data::{NewRoom, RoomUpdate},
            errors::RoomsServiceError,
            records::{RoomRecord, RoomUuid},
            repository::PgRoomsRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgRoomsService {
    db: Db,
    repository: PgRoomsRepository,
}

impl PgRoomsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRoomsRepository::new(),
        }
    }
}

#[async_trait]
impl RoomsService for PgRoomsService {
    async fn create_room(
        &self,
        tenant: TenantUuid,
        room: NewRoom,
    ) -> Result<RoomRecord, RoomsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let created = self.repository.create_room(&mut tx, &room).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_room(
        &self,
        tenant: TenantUuid,
        room: RoomUuid,
    ) -> Result<RoomRecord, RoomsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let found = self
            .repository
            .find_room(&mut tx, room)
            .await?
            .ok_or(RoomsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_rooms(&self, tenant: TenantUuid) -> Result<Vec<RoomRecord>, RoomsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let rooms = self.repository.list_rooms(&mut tx).await?;

        tx.commit().await?;

        Ok(rooms)
    }

    async fn update_room(
        &self,
        tenant: TenantUuid,
        room: RoomUuid,
        update: RoomUpdate,
    ) -> Result<RoomRecord, RoomsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let updated = self
            .repository
            .update_room(&mut tx, room, &update)
            .await?
            .ok_or(RoomsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
/// Room persistence operations, all scoped to a tenant.
pub trait RoomsService: Send + Sync {
    /// Creates a new room.
    async fn create_room(
        &self,
        tenant: TenantUuid,
        room: NewRoom,
    ) -> Result<RoomRecord, RoomsServiceError>;

    /// Retrieves a single room.
    async fn get_room(
        &self,
        tenant: TenantUuid,
        room: RoomUuid,
    ) -> Result<RoomRecord, RoomsServiceError>;

    /// Retrieves all rooms, ordered by number.
    async fn list_rooms(&self, tenant: TenantUuid) -> Result<Vec<RoomRecord>, RoomsServiceError>;

    /// Updates a room's category and rate. The number is immutable.
    async fn update_room(
        &self,
        tenant: TenantUuid,
        room: RoomUuid,
        update: RoomUpdate,
    ) -> Result<RoomRecord, RoomsServiceError>;
}
