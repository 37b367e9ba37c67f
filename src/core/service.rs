//! Persistence collaborator for orders

use crate::core::entity::Order;
use anyhow::Result;
use async_trait::async_trait;

/// Storage abstraction the order handlers are written against
///
/// Implementations own id assignment and durability. The handlers never hold
/// orders between requests, so every call here is the source of truth.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist an order and return it with its id.
    ///
    /// An order without an id is inserted and receives a fresh, never reused
    /// id. An order with an id replaces whatever is stored under that id.
    async fn save(&self, order: Order) -> Result<Order>;

    /// Look an order up by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    /// Remove a persisted order
    async fn delete(&self, order: &Order) -> Result<()>;

    /// All stored orders, in the backend's natural order
    async fn find_all(&self) -> Result<Vec<Order>>;
}
