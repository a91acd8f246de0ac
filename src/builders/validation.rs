//! Opt-in validation of built orders.
//!
//! Nothing on the construction path calls into this module. Callers that
//! want checked orders use [`Order::validate`] or
//! [`OrderBuilder::try_build`](super::OrderBuilder::try_build).

use super::error::{BuilderError, BuilderResult};
use crate::types::Order;
use tracing::warn;

impl Order {
    /// Check that the mandatory fields are filled in and that any supplied
    /// contact details are well formed.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingRequiredField`] for an empty or
    /// whitespace-only id, article or address field, and
    /// [`BuilderError::InvalidValue`] for a malformed phone number or email.
    pub fn validate(&self) -> BuilderResult<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(id = self.id(), error = %err, "order failed validation");
        }
        result
    }

    fn check(&self) -> BuilderResult<()> {
        require("id", self.id())?;
        require("article", self.article())?;

        let address = self.address();
        require("address.name", address.name())?;
        require("address.number", address.number())?;
        require("address.street", address.street())?;
        require("address.city", address.city())?;
        require("address.zip_code", address.zip_code())?;

        if let Some(phone_number) = self.phone_number() {
            check_phone_number(phone_number)?;
        }
        if let Some(email) = self.email() {
            check_email(email)?;
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> BuilderResult<()> {
    if value.trim().is_empty() {
        return Err(BuilderError::MissingRequiredField(field));
    }
    Ok(())
}

fn check_phone_number(phone_number: &str) -> BuilderResult<()> {
    if let Some(c) = phone_number
        .chars()
        .find(|c| !(c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')')))
    {
        return Err(BuilderError::InvalidValue {
            field: "phone_number",
            reason: format!("unexpected character '{c}'"),
        });
    }
    if !phone_number.chars().any(|c| c.is_ascii_digit()) {
        return Err(BuilderError::InvalidValue {
            field: "phone_number",
            reason: "contains no digits".to_string(),
        });
    }
    Ok(())
}

fn check_email(email: &str) -> BuilderResult<()> {
    let invalid = |reason: &str| BuilderError::InvalidValue {
        field: "email",
        reason: reason.to_string(),
    };

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid("expected exactly one '@'")),
    };
    if local.is_empty() {
        return Err(invalid("empty local part"));
    }
    if domain.is_empty() {
        return Err(invalid("empty domain"));
    }
    Ok(())
}
