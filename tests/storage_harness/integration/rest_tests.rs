//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! an `OrderRepository` through full REST round-trips:
//! JSON → HTTP request → handler → OrderRepository → HTTP response → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$factory` must produce an `impl OrderRepository + 'static` holding no
/// orders, whose first assigned id is 1.
///
/// # Generated Tests
///
/// ## CRUD (8 tests)
/// - `test_rest_create`: POST 201 + assigned id
/// - `test_rest_create_ignores_client_id`: a supplied `id` is not honoured
/// - `test_rest_get`: GET 200 + stored fields
/// - `test_rest_get_is_repeatable`: two GETs return identical bodies
/// - `test_rest_list`: GET 200 + every stored order
/// - `test_rest_update`: PUT 200 + replaced fields, id unchanged
/// - `test_rest_update_ignores_client_id`: an `id` in the PUT body is not honoured
/// - `test_rest_delete`: DELETE 204, then GET 404
///
/// ## Validation (3 tests)
/// - `test_rest_create_all_violations`: one entry per broken rule
/// - `test_rest_create_null_fields_are_violations`: `null` counts as blank / zero
/// - `test_rest_create_blank_name_only`
///
/// ## Error handling (6 tests)
/// - `test_rest_get_not_found` / `test_rest_update_not_found` / `test_rest_delete_not_found`
/// - `test_rest_invalid_id`: non-integer id → 400
/// - `test_rest_malformed_body`: unparseable JSON → 400
/// - `test_rest_wrong_content_type`: non-JSON content type → 415
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use orders::core::OrderRepository;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server() -> TestServer {
                let repository: Arc<dyn OrderRepository> = Arc::new($factory);
                storage_harness::integration::build_test_server(repository)
            }

            async fn create(server: &TestServer, name: &str, address: &str, total: f64) -> i64 {
                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": name,
                        "orderDate": "2023-07-03",
                        "shippingAddress": address,
                        "total": total
                    }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()["id"].as_i64().unwrap()
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "Peter Griffin",
                        "orderDate": "2023-07-03",
                        "shippingAddress": "31 Spooner Street",
                        "total": 50.0
                    }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["id"], 1);
                assert_eq!(body["customerName"], "Peter Griffin");
                assert_eq!(body["orderDate"], "2023-07-03");
                assert_eq!(body["shippingAddress"], "31 Spooner Street");
                assert_eq!(body["total"], 50.0);
            }

            #[tokio::test]
            async fn test_rest_create_ignores_client_id() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "id": 999,
                        "customerName": "Lois Griffin",
                        "shippingAddress": "31 Spooner Street",
                        "total": 12.5
                    }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                assert_ne!(response.json::<Value>()["id"], 999);
                server.get("/orders/999").await.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let id = create(&server, "Jane Smith", "456 Oak St", 150.0).await;

                let response = server.get(&format!("/orders/{}", id)).await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["id"], id);
                assert_eq!(body["customerName"], "Jane Smith");
                assert_eq!(body["shippingAddress"], "456 Oak St");
                assert_eq!(body["total"], 150.0);
            }

            #[tokio::test]
            async fn test_rest_get_is_repeatable() {
                let server = make_server().await;
                let id = create(&server, "Jane Smith", "456 Oak St", 150.0).await;
                let path = format!("/orders/{}", id);

                let first: Value = server.get(&path).await.json();
                let second: Value = server.get(&path).await.json();

                assert_eq!(first, second);
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;
                server.get("/orders").await.assert_json(&json!([]));

                for order in sample_batch(3) {
                    create(&server, &order.customer_name, &order.shipping_address, order.total)
                        .await;
                }

                let response = server.get("/orders").await;
                response.assert_status_ok();
                let body: Vec<Value> = response.json();
                assert_count(&body, 3);
            }

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;
                let id = create(&server, "John Moore", "123 Main St", 100.0).await;
                assert_eq!(id, 1);

                let response = server
                    .put("/orders/1")
                    .json(&json!({
                        "customerName": "Rey Mysterio",
                        "orderDate": "2023-07-04",
                        "shippingAddress": "2 Brooklyn Drive",
                        "total": 10.0
                    }))
                    .await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["id"], 1);
                assert_eq!(body["customerName"], "Rey Mysterio");
                assert_eq!(body["orderDate"], "2023-07-04");
                assert_eq!(body["shippingAddress"], "2 Brooklyn Drive");
                assert_eq!(body["total"], 10.0);

                let stored: Value = server.get("/orders/1").await.json();
                assert_eq!(stored, body);
            }

            #[tokio::test]
            async fn test_rest_update_ignores_client_id() {
                let server = make_server().await;
                let id = create(&server, "John Moore", "123 Main St", 100.0).await;
                assert_eq!(id, 1);

                let response = server
                    .put("/orders/1")
                    .json(&json!({
                        "id": 99,
                        "customerName": "Rey Mysterio",
                        "shippingAddress": "2 Brooklyn Drive",
                        "total": 10.0
                    }))
                    .await;

                response.assert_status_ok();
                assert_eq!(response.json::<Value>()["id"], 1);
                server.get("/orders/99").await.assert_status(StatusCode::NOT_FOUND);
                let all: Vec<Value> = server.get("/orders").await.json();
                assert_count(&all, 1);
                assert_eq!(all[0]["id"], 1);
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let id = create(&server, "Martin Luther King", "1 Freedom Street", 10.0).await;
                let path = format!("/orders/{}", id);

                let response = server.delete(&path).await;
                response.assert_status(StatusCode::NO_CONTENT);
                assert!(response.text().is_empty());

                server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Validation
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_all_violations() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "",
                        "orderDate": "2023-07-03",
                        "shippingAddress": "",
                        "total": -10.0
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Vec<String> = response.json();
                assert_eq!(
                    body,
                    vec![
                        "customerName: Name cannot be empty".to_string(),
                        "shippingAddress: Address cannot be empty".to_string(),
                        "total: The total needs be greater than 0".to_string(),
                    ]
                );
                server.get("/orders").await.assert_json(&json!([]));
            }

            #[tokio::test]
            async fn test_rest_create_null_fields_are_violations() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": null,
                        "orderDate": null,
                        "shippingAddress": null,
                        "total": null
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Vec<String> = response.json();
                assert_eq!(
                    body,
                    vec![
                        "customerName: Name cannot be empty".to_string(),
                        "shippingAddress: Address cannot be empty".to_string(),
                        "total: The total needs be greater than 0".to_string(),
                    ]
                );

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "A",
                        "shippingAddress": "B",
                        "total": null
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Vec<String> = response.json();
                assert_eq!(body, vec!["total: The total needs be greater than 0".to_string()]);
            }

            #[tokio::test]
            async fn test_rest_create_blank_name_only() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "   ",
                        "shippingAddress": "31 Spooner Street",
                        "total": 1.0
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Vec<String> = response.json();
                assert_eq!(body, vec!["customerName: Name cannot be empty".to_string()]);
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_get_not_found() {
                let server = make_server().await;

                let response = server.get("/orders/100").await;

                response.assert_status(StatusCode::NOT_FOUND);
                assert!(response.text().is_empty());
            }

            #[tokio::test]
            async fn test_rest_update_not_found() {
                let server = make_server().await;

                let response = server
                    .put("/orders/10")
                    .json(&json!({
                        "customerName": "Rey Mysterio",
                        "shippingAddress": "2 Brooklyn Drive",
                        "total": 10.0
                    }))
                    .await;

                response.assert_status(StatusCode::NOT_FOUND);
                server.get("/orders").await.assert_json(&json!([]));
            }

            #[tokio::test]
            async fn test_rest_delete_not_found() {
                let server = make_server().await;

                server
                    .delete("/orders/10")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_invalid_id() {
                let server = make_server().await;

                let response = server.get("/orders/not-a-number").await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_ORDER_ID");
            }

            #[tokio::test]
            async fn test_rest_malformed_body() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .text("{ not json")
                    .content_type("application/json")
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_BODY");
            }

            #[tokio::test]
            async fn test_rest_wrong_content_type() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .text(r#"{"customerName":"Meg","shippingAddress":"Quahog","total":1.0}"#)
                    .content_type("text/plain")
                    .await;

                response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
                let body: Value = response.json();
                assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");
                server.get("/orders").await.assert_json(&json!([]));
            }
        }
    };
}
