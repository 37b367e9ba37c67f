//! Axum extractors for order requests
//!
//! Both extractors reject with an [`OrderError`], so malformed requests get
//! the same error body shape as every other failure. A body sent without a
//! JSON content type is answered with 415, any other body failure with 400.

use crate::core::error::OrderError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON body deserialized into a typed payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(Payload(payload): Payload<OrderPayload>) { ... }
/// ```
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = OrderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection @ JsonRejection::MissingJsonContentType(_)) => {
                Err(OrderError::UnsupportedMediaType {
                    message: rejection.body_text(),
                })
            }
            Err(rejection) => Err(OrderError::InvalidBody {
                message: rejection.body_text(),
            }),
        }
    }
}

/// Order id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        raw.parse::<i64>().map(OrderId).map_err(|_| OrderError::InvalidId {
            raw: raw.to_string(),
        })
    }
}

impl<S> FromRequestParts<S> for OrderId
where
    S: Send + Sync,
{
    type Rejection = OrderError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| OrderError::InvalidId {
                raw: rejection.body_text(),
            })?;

        OrderId::parse(&raw)
    }
}
