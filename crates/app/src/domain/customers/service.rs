//! Customers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        customers::{
            data::NewCustomer,
            errors::CustomersServiceError,
            records::{CustomerRecord, CustomerUuid},
            repository::PgCustomersRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn create_customer(
        &self,
        tenant: TenantUuid,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let created = self.repository.create_customer(&mut tx, &customer).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_customer(
        &self,
        tenant: TenantUuid,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let found = self
            .repository
            .find_customer(&mut tx, customer)
            .await?
            .ok_or(CustomersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_customers(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let customers = self.repository.list_customers(&mut tx).await?;

        tx.commit().await?;

        Ok(customers)
    }
}

#[automock]
#[async_trait]
/// Customer persistence operations, all scoped to a tenant.
pub trait CustomersService: Send + Sync {
    /// Creates a new customer.
    async fn create_customer(
        &self,
        tenant: TenantUuid,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Retrieves a single customer.
    async fn get_customer(
        &self,
        tenant: TenantUuid,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Retrieves all customers, ordered by name.
    async fn list_customers(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError>;
}
