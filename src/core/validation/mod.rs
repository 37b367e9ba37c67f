//! Field-level validation of order payloads
//!
//! Validation runs on the typed [`OrderPayload`] after deserialization and
//! before anything reaches the repository. Every rule is evaluated, so a
//! single response can report all of a payload's problems at once.

pub mod validators;

use crate::core::entity::OrderPayload;
use serde::Serialize;
use std::fmt;

pub const CUSTOMER_NAME_EMPTY: &str = "Name cannot be empty";
pub const SHIPPING_ADDRESS_EMPTY: &str = "Address cannot be empty";
pub const TOTAL_NOT_POSITIVE: &str = "The total needs be greater than 0";

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire name of the offending field (e.g. `customerName`)
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Render violations as `field: message` entries separated by commas
pub fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Types that can check themselves against a rule set
pub trait Validate {
    /// All violations, in rule declaration order. Empty means valid.
    fn violations(&self) -> Vec<Violation>;

    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

impl Validate for OrderPayload {
    fn violations(&self) -> Vec<Violation> {
        let customer_name = validators::not_blank("customerName", CUSTOMER_NAME_EMPTY);
        let shipping_address = validators::not_blank("shippingAddress", SHIPPING_ADDRESS_EMPTY);
        let total = validators::positive("total", TOTAL_NOT_POSITIVE);

        [
            customer_name(&self.customer_name),
            shipping_address(&self.shipping_address),
            total(self.total),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
