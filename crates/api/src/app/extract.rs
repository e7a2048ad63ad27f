//! Extractors that run field validation before handlers.
//!
//! Handlers declare `ValidatedJson<T>` / `ValidatedQuery<T>` for types whose
//! constraints go beyond what deserialization can express; the extractor
//! rejects the request with a structured error when any check fails, so the
//! handler body never sees a non-conforming value.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::{Json, async_trait};
use serde::de::DeserializeOwned;

use shopfront_core::Validate;

use crate::app::errors;

/// JSON body that passed both deserialization and field validation.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|err| {
            errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", err.body_text())
        })?;
        value.validate().map_err(errors::validation_failed)?;
        Ok(Self(value))
    }
}

/// Query string that passed both deserialization and field validation.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = axum::response::Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", err.body_text())
            })?;
        value.validate().map_err(errors::validation_failed)?;
        Ok(Self(value))
    }
}
