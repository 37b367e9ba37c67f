//! Router builder utilities for the order routes

use crate::server::handlers::{
    AppState, create_order, delete_order, get_order, list_orders, update_order,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the `/orders` routes:
/// - GET /orders - List all orders
/// - POST /orders - Create an order
/// - GET /orders/{id} - Get an order
/// - PUT /orders/{id} - Replace an order's fields
/// - DELETE /orders/{id} - Delete an order
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "order-service"
    }))
}
