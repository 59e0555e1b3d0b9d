//! Report date query parsing helpers.

use jiff::{Zoned, civil::Date};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Resolve an optional `on` query parameter to a calendar date.
pub(crate) trait OnDateExt {
    fn into_on_date(self) -> Result<Date, StatusError>;
}

impl OnDateExt for QueryParam<String, false> {
    fn into_on_date(self) -> Result<Date, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Date>())
            .transpose()
            .or_400("could not parse \"on\" query parameter")
            .map(|on_date| on_date.unwrap_or_else(|| Zoned::now().date()))
    }
}
