//! Assemble shipping orders through a fluent builder API.
//!
//! An [`Order`] always carries an id, an article and the [`Address`] it ships
//! to. Optional contact details are chained onto an [`OrderBuilder`] before
//! the order is built:
//!
//! ```rust
//! use order_builder::{Address, OrderBuilder};
//!
//! let address = Address::new("Sherlock Holmes", "221b", "Baker street", "London", "NW1 6XE");
//! let order = OrderBuilder::new("1", "violin", address)
//!     .phone_number("0111111111")
//!     .build();
//!
//! assert_eq!(order.id(), "1");
//! assert_eq!(order.phone_number(), Some("0111111111"));
//! assert_eq!(order.email(), None);
//! ```

pub mod builders;
pub mod fmt;
pub mod types;

#[cfg(feature = "serde")]
mod serde;

pub use builders::{BuilderError, BuilderResult, OrderBuilder};
pub use types::{Address, Order};
