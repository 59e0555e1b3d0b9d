//! Customer Data

use crate::domain::customers::records::CustomerUuid;

/// New Customer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    /// UUID to assign to the customer row.
    pub uuid: CustomerUuid,

    /// Guest's full name.
    pub full_name: String,

    /// Contact email, unique within the tenant.
    pub email: String,

    /// Optional contact phone number.
    pub phone: Option<String>,
}
