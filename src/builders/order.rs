//! Builder for creating orders.

use super::error::BuilderResult;
use crate::types::{Address, Order};
use tracing::{debug, trace};

/// Builder for creating an [`Order`].
///
/// The mandatory fields are taken up front; the phone number and email can be
/// chained on in any order, and repeated calls overwrite the previous value.
///
/// [`build`](Self::build) returns an independent snapshot of the order, so
/// changes made to the builder afterwards never show up in orders that were
/// already handed out.
///
/// # Examples
///
/// ```rust
/// use order_builder::{Address, OrderBuilder};
///
/// let address = Address::new("Sherlock Holmes", "221b", "Baker street", "London", "NW1 6XE");
/// let order = OrderBuilder::new("1", "violin", address)
///     .phone_number("0111111111")
///     .build();
///
/// assert_eq!(order.phone_number(), Some("0111111111"));
/// assert_eq!(order.email(), None);
/// ```
#[derive(Clone, Debug)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    /// Create a new order builder with the mandatory fields.
    pub fn new(id: impl Into<String>, article: impl Into<String>, address: Address) -> Self {
        let order = Order::new(id, article, address);
        trace!(id = order.id(), article = order.article(), "order builder created");
        Self { order }
    }

    /// Set the contact phone number.
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.order.set_phone_number(phone_number.into());
        trace!(id = self.order.id(), "phone number set");
        self
    }

    /// Set the contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.order.set_email(email.into());
        trace!(id = self.order.id(), "email set");
        self
    }

    /// Build the order.
    ///
    /// Can be called any number of times; each call returns a fresh copy of
    /// the current state.
    pub fn build(&self) -> Order {
        debug!(
            id = self.order.id(),
            article = self.order.article(),
            has_phone_number = self.order.phone_number().is_some(),
            has_email = self.order.email().is_some(),
            "order built"
        );
        self.order.clone()
    }

    /// Build the order and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if a mandatory field is empty or an optional field
    /// is malformed. See [`Order::validate`].
    pub fn try_build(&self) -> BuilderResult<Order> {
        let order = self.build();
        order.validate()?;
        Ok(order)
    }
}

impl From<Order> for OrderBuilder {
    fn from(order: Order) -> Self {
        Self { order }
    }
}
