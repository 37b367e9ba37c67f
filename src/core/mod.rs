//! Core module containing the order model, validation and service traits

pub mod entity;
pub mod error;
pub mod extractors;
pub mod service;
pub mod validation;

pub use entity::{Order, OrderPayload};
pub use error::{ErrorResponse, OrderError, OrderResult};
pub use extractors::{OrderId, Payload};
pub use service::OrderRepository;
pub use validation::{Validate, Violation};
