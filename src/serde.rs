//! JSON helpers for orders.
//!
//! [`Address`](crate::Address) and [`Order`] derive `Serialize` and
//! `Deserialize` when the `serde` feature is enabled. Unset optional fields
//! are left out of the output and read back as unset.

use crate::types::Order;

impl Order {
    /// Serialize the order as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `serde_json` fails to serialize the order.
    ///
    /// # Examples
    /// ```rust
    /// use order_builder::{Address, OrderBuilder};
    ///
    /// let address = Address::new("Sherlock Holmes", "221b", "Baker street", "London", "NW1 6XE");
    /// let json = OrderBuilder::new("1", "violin", address).build().to_json().unwrap();
    ///
    /// assert!(json.contains("\"article\": \"violin\""));
    /// assert!(!json.contains("email"));
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse an order from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or a mandatory field
    /// (`id`, `article`, `address` or any address field) is missing.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
