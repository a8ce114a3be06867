//! Custom Axum extractors
//!
//! Both reject with `ApiError::Validation` so every client input error is a
//! 400 with the same JSON shape. An oversized body is the one 413.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and parse a task id from path
pub struct TaskIdParam(pub i64);

impl<S> FromRequestParts<S> for TaskIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        let id = id.parse::<i64>().map_err(|_| invalid_id())?;
        Ok(Self(id))
    }
}

fn invalid_id() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "id",
        reason: "expected an integer",
    })
}

/// JSON request body.
///
/// Unlike `axum::Json` this ignores `Content-Type` and answers every decode
/// failure with 400 rather than 415/422. Bodies over the default limit keep
/// their 413.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge {
                    reason: e.body_text(),
                },
                _ => ApiError::Validation(ValidationError::Malformed {
                    what: "request body",
                    reason: e.body_text(),
                }),
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Validation(ValidationError::Malformed {
                what: "request body",
                reason: e.to_string(),
            })
        })?;

        Ok(Self(value))
    }
}
