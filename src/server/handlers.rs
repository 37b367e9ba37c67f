//! HTTP handlers for the `/orders` resource
//!
//! Handlers are stateless: every request goes to the repository, and at most
//! two repository calls are made per request (an existence lookup followed by
//! a write or delete).

use crate::config::ValidationConfig;
use crate::core::validation::{Validate, describe};
use crate::core::{Order, OrderError, OrderId, OrderPayload, OrderRepository, OrderResult, Payload};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

/// Shared state for the order handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn OrderRepository>,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn OrderRepository>, validation: ValidationConfig) -> Self {
        Self {
            repository,
            validation,
        }
    }

    async fn find_existing(&self, id: i64) -> OrderResult<Order> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| OrderError::storage("find", e))?
            .ok_or(OrderError::NotFound { id })
    }
}

/// `POST /orders`
pub async fn create_order(
    State(state): State<AppState>,
    Payload(payload): Payload<OrderPayload>,
) -> OrderResult<(StatusCode, Json<Order>)> {
    let violations = payload.violations();
    if !violations.is_empty() {
        tracing::debug!(violations = %describe(&violations), "rejected order payload");
        return Err(OrderError::Validation(violations));
    }

    let created = state
        .repository
        .save(payload.into_order())
        .await
        .map_err(|e| OrderError::storage("create", e))?;

    tracing::info!(id = ?created.id, "order created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> OrderResult<Json<Order>> {
    tracing::debug!(id, "fetching order");
    state.find_existing(id).await.map(Json)
}

/// `PUT /orders/{id}`
///
/// Overwrites `customerName`, `orderDate`, `shippingAddress` and `total`
/// with the payload's values and keeps the id. The payload is only checked
/// against the validation rules when `validation.validate_updates` is set.
pub async fn update_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
    Payload(payload): Payload<OrderPayload>,
) -> OrderResult<Json<Order>> {
    let violations = payload.violations();
    if !violations.is_empty() {
        if state.validation.validate_updates {
            return Err(OrderError::Validation(violations));
        }
        tracing::warn!(
            id,
            violations = %describe(&violations),
            "applying order update that fails validation"
        );
    }

    let mut order = state.find_existing(id).await?;
    order.apply(payload);

    let updated = state
        .repository
        .save(order)
        .await
        .map_err(|e| OrderError::storage("update", e))?;

    tracing::info!(id, "order updated");
    Ok(Json(updated))
}

/// `DELETE /orders/{id}`
pub async fn delete_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> OrderResult<StatusCode> {
    let order = state.find_existing(id).await?;

    state
        .repository
        .delete(&order)
        .await
        .map_err(|e| OrderError::storage("delete", e))?;

    tracing::info!(id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /orders`
pub async fn list_orders(State(state): State<AppState>) -> OrderResult<Json<Vec<Order>>> {
    let orders = state
        .repository
        .find_all()
        .await
        .map_err(|e| OrderError::storage("list", e))?;

    tracing::debug!(count = orders.len(), "listing orders");
    Ok(Json(orders))
}
