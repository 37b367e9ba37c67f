//! Reusable field rules
//!
//! Each constructor returns a closure that checks one field value and yields
//! a [`Violation`] when the value breaks the rule.

use super::Violation;

/// Rule: text must contain something other than whitespace
pub fn not_blank(
    field: &'static str,
    message: &'static str,
) -> impl Fn(&str) -> Option<Violation> + Send + Sync + Clone {
    move |value: &str| {
        if value.trim().is_empty() {
            Some(Violation::new(field, message))
        } else {
            None
        }
    }
}

/// Rule: number must be strictly greater than zero
///
/// `NaN` is not greater than zero and is rejected.
pub fn positive(
    field: &'static str,
    message: &'static str,
) -> impl Fn(f64) -> Option<Violation> + Send + Sync + Clone {
    move |value: f64| {
        if value > 0.0 {
            None
        } else {
            Some(Violation::new(field, message))
        }
    }
}
