//! The `Order` entity and the typed payload it is created and updated from

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A customer order as stored by an [`OrderRepository`](crate::core::OrderRepository).
///
/// `id` is `None` until the order has been persisted for the first time.
/// Once assigned by the repository it identifies the order for its whole
/// lifetime and is never reused.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub customer_name: String,
    pub order_date: Option<NaiveDate>,
    pub shipping_address: String,
    pub total: f64,
}

impl Order {
    /// Create a new, not yet persisted order
    pub fn new(
        customer_name: impl Into<String>,
        order_date: Option<NaiveDate>,
        shipping_address: impl Into<String>,
        total: f64,
    ) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            order_date,
            shipping_address: shipping_address.into(),
            total,
        }
    }

    /// Same order with the given identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrite every mutable field with the payload's values.
    ///
    /// This is a full replace: fields missing from the payload overwrite
    /// the stored value with their default. `id` is left untouched.
    pub fn apply(&mut self, payload: OrderPayload) {
        self.customer_name = payload.customer_name;
        self.order_date = payload.order_date;
        self.shipping_address = payload.shipping_address;
        self.total = payload.total;
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Inbound representation of an order, as sent to `POST` and `PUT /orders`.
///
/// Every field is optional on the wire. Absent or `null` text fields become
/// empty and an absent or `null` total becomes `0`, which the validator then
/// reports instead of the request being rejected as malformed. A
/// client-supplied `id` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub customer_name: String,
    pub order_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub shipping_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}

/// Read an explicit JSON `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl OrderPayload {
    /// Build an unsaved [`Order`] from this payload
    pub fn into_order(self) -> Order {
        Order::new(
            self.customer_name,
            self.order_date,
            self.shipping_address,
            self.total,
        )
    }
}
