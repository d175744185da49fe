//! Request handlers

pub mod health;
pub mod claims;
pub mod rules;
pub mod analytics;
pub mod items;

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiError;

/// Unwraps a record body. A request sent without a JSON content type carries
/// no fields; a malformed or non-object body is a validation error.
pub(crate) fn record_fields<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(fields)) => Ok(fields),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}
