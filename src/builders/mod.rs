//! Builder pattern API for assembling orders.
//!
//! Orders are put together step by step: the mandatory fields go into
//! [`OrderBuilder::new`], optional contact details are chained on, and
//! [`OrderBuilder::build`] hands out the finished [`Order`](crate::Order).

/// Error types for the builder API.
pub mod error;
/// Builder for creating orders.
pub mod order;
/// Opt-in validation of built orders.
pub mod validation;


// Re-export builders at module level
pub use error::{BuilderError, BuilderResult};
pub use order::OrderBuilder;
