//! # Order Service
//!
//! A REST service managing the lifecycle of customer orders.
//!
//! ## Features
//!
//! - **CRUD over `/orders`**: create, read, update, delete and list
//! - **Field validation**: blank names/addresses and non-positive totals are
//!   rejected with every violation listed
//! - **Pluggable storage**: handlers talk to an [`OrderRepository`](core::OrderRepository);
//!   in-memory and PostgreSQL (`postgres` feature) implementations ship with the crate
//! - **Typed errors**: each failure maps to exactly one HTTP status
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_repository(InMemoryOrderRepository::new())
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ErrorResponse, Order, OrderError, OrderPayload, OrderRepository, OrderResult, Validate,
        Violation,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderRepository;

    // === Config ===
    pub use crate::config::{ServiceConfig, StorageBackend, ValidationConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, build_order_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
}
