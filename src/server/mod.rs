//! HTTP server: handlers, routing and the builder that wires them together

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::build_order_routes;
