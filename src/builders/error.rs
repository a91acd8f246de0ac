//! Error types for the builder API.

use thiserror::Error;

/// Errors reported when validating a built order.
///
/// The construction path itself never fails; these are only produced by
/// [`Order::validate`](crate::Order::validate) and
/// [`OrderBuilder::try_build`](super::OrderBuilder::try_build).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field is empty.
    #[error("Required field '{0}' is missing")]
    MissingRequiredField(&'static str),
    /// An invalid value was provided for a field.
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue {
        /// The name of the field that had an invalid value.
        field: &'static str,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;
