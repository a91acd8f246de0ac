//! Core order data structures.
//!
//! This module contains the value types produced by the builder API: the
//! shipping [`Address`] and the [`Order`] that owns it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a shipping destination.
///
/// All fields are free-form text and no format checks are performed on
/// construction. Fields are read-only once the address exists.
///
/// # Examples
///
/// ```rust
/// use order_builder::Address;
///
/// let address = Address::new("Sherlock Holmes", "221b", "Baker street", "London", "NW1 6XE");
/// assert_eq!(address.city(), "London");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address {
    name: String,
    number: String,
    street: String,
    city: String,
    zip_code: String,
}

impl Address {
    /// Create a new address from its five postal fields.
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
        }
    }

    /// Recipient name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Street number token, e.g. "221b".
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Street name.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// City name.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Postal code.
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// Field names paired with their values, in rendering order.
    pub(crate) fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("number", &self.number),
            ("street", &self.street),
            ("city", &self.city),
            ("zip_code", &self.zip_code),
        ]
    }
}

/// Represents a purchase record.
///
/// An order always carries an id, an article and the [`Address`] it ships to.
/// The phone number and email are optional and can only be supplied through
/// [`OrderBuilder`](crate::builders::OrderBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    id: String,
    article: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    phone_number: Option<String>,
    address: Address,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    email: Option<String>,
}

impl Order {
    /// Create an order from its mandatory fields. Optional fields start unset.
    pub fn new(id: impl Into<String>, article: impl Into<String>, address: Address) -> Self {
        Self {
            id: id.into(),
            article: article.into(),
            phone_number: None,
            address,
            email: None,
        }
    }

    /// Order identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the purchased item.
    pub fn article(&self) -> &str {
        &self.article
    }

    /// Contact phone number, if one was supplied.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Shipping address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Contact email, if one was supplied.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub(crate) fn set_phone_number(&mut self, phone_number: String) {
        self.phone_number = Some(phone_number);
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = Some(email);
    }
}
