//! Custom Axum extractors
//!
//! Each one turns axum's default rejection into an [`ApiError`] so malformed
//! input still gets the uniform error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Page, PageParams, ValidationError};

/// JSON body whose rejections map to 400 (unreadable) or 422 (wrong shape)
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                tracing::debug!("Rejected request body: {}", e.body_text());
                Err(ApiError::Validation(ValidationError::InvalidFormat {
                    field: "body",
                    reason: "does not match the expected shape",
                }))
            }
            Err(other) => Err(ApiError::bad_request(other.body_text())),
        }
    }
}

/// Integer id from the path. Anything else behaves like an unmatched route.
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("path", &path))?;

        let id = raw
            .parse::<i32>()
            .map_err(|_| ApiError::not_found("path", &path))?;

        Ok(Self(id))
    }
}

/// `?page=N`, defaulting to page 1 when absent or unreadable
pub struct PageQuery(pub Page);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self(Page::from(params)))
    }
}
