//! In-memory implementation of OrderRepository for testing and development

use crate::core::{Order, OrderRepository};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory order repository
///
/// Ids come from a monotonically increasing counter starting at 1 and are
/// never handed out twice, even after the order holding one is deleted.
/// Uses RwLock for thread-safe access; `find_all` returns orders by id.
#[derive(Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<i64, Order>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderRepository {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored orders
    ///
    /// A poisoned lock still holds a consistent map, since no write leaves it
    /// half-updated, so the count is read through the poison.
    pub fn len(&self) -> usize {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, mut order: Order) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match order.id {
            Some(id) => {
                // keep the counter ahead of explicitly supplied ids
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        order.id = Some(id);

        orders.insert(id, order.clone());

        Ok(order)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(&id).cloned())
    }

    async fn delete(&self, order: &Order) -> Result<()> {
        let id = order
            .id
            .ok_or_else(|| anyhow!("Cannot delete an order that was never persisted"))?;

        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.remove(&id);

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.values().cloned().collect())
    }
}
