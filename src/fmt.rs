//! Formatting utilities for order data structures.
//!
//! This module renders addresses and orders as a field-by-field dump, one
//! `key: value` line per field. The same layout backs the [`Display`]
//! implementations and the text output of the command-line tool.

use crate::types::{Address, Order};
use std::fmt::{self, Display, Formatter};

/// Placeholder rendered for optional fields that were never set.
pub const UNSET: &str = "unset";

/// Formats an optional field for display.
///
/// # Examples
/// ```rust
/// use order_builder::fmt::format_optional;
///
/// assert_eq!(format_optional(Some("0111111111")), "0111111111");
/// assert_eq!(format_optional(None), "unset");
/// ```
pub fn format_optional(value: Option<&str>) -> &str {
    value.unwrap_or(UNSET)
}

fn write_address(f: &mut Formatter<'_>, address: &Address, indent: &str) -> fmt::Result {
    let mut first = true;
    for (key, value) in address.fields() {
        if !first {
            writeln!(f)?;
        }
        first = false;
        write!(f, "{indent}{key}: {value}")?;
    }
    Ok(())
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_address(f, self, "")
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "id: {}", self.id())?;
        writeln!(f, "article: {}", self.article())?;
        writeln!(f, "phone_number: {}", format_optional(self.phone_number()))?;
        writeln!(f, "address:")?;
        write_address(f, self.address(), "  ")?;
        writeln!(f)?;
        write!(f, "email: {}", format_optional(self.email()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::OrderBuilder;

    fn baker_street() -> Address {
        Address::new("Sherlock Holmes", "221b", "Baker street", "London", "NW1 6XE")
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some("a@b")), "a@b");
        assert_eq!(format_optional(Some("")), "");
        assert_eq!(format_optional(None), UNSET);
    }

    #[test]
    fn test_address_display() {
        assert_eq!(
            baker_street().to_string(),
            "name: Sherlock Holmes\n\
             number: 221b\n\
             street: Baker street\n\
             city: London\n\
             zip_code: NW1 6XE"
        );
    }

    #[test]
    fn test_order_display() {
        let order = OrderBuilder::new("1", "violin", baker_street())
            .phone_number("0111111111")
            .build();

        assert_eq!(
            order.to_string(),
            "id: 1\n\
             article: violin\n\
             phone_number: 0111111111\n\
             address:\n  \
             name: Sherlock Holmes\n  \
             number: 221b\n  \
             street: Baker street\n  \
             city: London\n  \
             zip_code: NW1 6XE\n\
             email: unset"
        );
    }

    #[test]
    fn test_order_display_follows_field_order() {
        let order = OrderBuilder::new("1", "violin", baker_street())
            .email("sherlock@bakerstreet.co.uk")
            .build();
        let text = order.to_string();

        let keys: Vec<&str> = text
            .lines()
            .filter(|line| !line.starts_with(' '))
            .filter_map(|line| line.split(':').next())
            .collect();

        // Same order as the serialized fields
        assert_eq!(keys, ["id", "article", "phone_number", "address", "email"]);
        assert!(text.ends_with("email: sherlock@bakerstreet.co.uk"));
    }
}
