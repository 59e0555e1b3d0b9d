//! Create Customer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::customers::data::NewCustomer;

use crate::{customers::errors::into_status_error, extensions::*, state::State};

/// Create Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCustomerRequest {
    pub uuid: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            uuid: request.uuid.into(),
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
        }
    }
}

/// Customer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerCreatedResponse {
    /// Created customer UUID
    pub uuid: Uuid,
}

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::CONFLICT, description = "Customer email already taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_scope_or_401()?.tenant;

    let uuid = state
        .app
        .customers
        .create_customer(tenant, json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/customers/{uuid}"), true)
        .or_500("could not encode location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CustomerCreatedResponse { uuid: uuid.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use innkeep_app::domain::customers::{
        CustomersServiceError, MockCustomersService, records::CustomerUuid,
    };

    use crate::test_helpers::{TEST_TENANT_UUID, customers_service, make_customer};

    use super::*;

    fn make_service(repo: MockCustomersService) -> Service {
        customers_service(repo, Router::with_path("customers").post(handler))
    }

    #[tokio::test]
    async fn test_create_customer_success() -> TestResult {
        let uuid = CustomerUuid::new();
        let customer = make_customer(uuid);

        let mut repo = MockCustomersService::new();

        repo.expect_create_customer()
            .once()
            .withf(move |tenant, new| {
                *tenant == TEST_TENANT_UUID
                    && *new
                        == NewCustomer {
                            uuid,
                            full_name: "Ada Lovelace".to_string(),
                            email: "ada@example.com".to_string(),
                            phone: None,
                        }
            })
            .return_once(move |_, _| Ok(customer));

        repo.expect_get_customer().never();
        repo.expect_list_customers().never();

        let mut res = TestClient::post("http://example.com/customers")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "full_name": "Ada Lovelace",
                "email": "ada@example.com",
            }))
            .send(&make_service(repo))
            .await;

        let body: CustomerCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/customers/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_customer_duplicate_email_returns_409() -> TestResult {
        let uuid = CustomerUuid::new();

        let mut repo = MockCustomersService::new();

        repo.expect_create_customer()
            .once()
            .withf(move |tenant, new| *tenant == TEST_TENANT_UUID && new.uuid == uuid)
            .return_once(|_, _| Err(CustomersServiceError::AlreadyExists));

        repo.expect_get_customer().never();
        repo.expect_list_customers().never();

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "full_name": "Ada Lovelace",
                "email": "ada@example.com",
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
