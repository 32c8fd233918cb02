//! Custom Axum extractors
//!
//! Each one turns axum's own rejection into `ApiError::Validation`, so every
//! malformed input is a 422 and is rejected before any storage access.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::{ListParams, ListQuery, ValidationError};
use super::error::ApiError;

/// Extract and validate a positive item id from path
#[derive(Debug, Clone, Copy)]
pub struct ValidItemId(pub i64);

impl ValidItemId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let id: i64 = raw.parse().map_err(|_| ValidationError::Malformed {
            what: "id",
            message: format!("'{}' is not a valid integer", raw),
        })?;

        if id < 1 {
            return Err(ValidationError::BelowMinimum { field: "id", min: 1 });
        }

        Ok(Self(id))
    }
}

impl<S> FromRequestParts<S> for ValidItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    what: "id",
                    message: rejection.body_text(),
                })
            })?;

        Ok(Self::parse(&raw)?)
    }
}

/// Extract and validate `limit`/`offset`/`name` listing parameters
#[derive(Debug, Clone)]
pub struct ValidListQuery(pub ListQuery);

impl<S> FromRequestParts<S> for ValidListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<ListParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    what: "query",
                    message: rejection.body_text(),
                })
            })?;

        Ok(Self(ListQuery::try_from(params)?))
    }
}

/// JSON body whose rejections (bad syntax, wrong shape, missing content type)
/// are reported as validation failures
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Malformed {
                what: "request body",
                message: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
