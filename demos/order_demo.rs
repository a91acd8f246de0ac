/// Demonstrates the order builder API.
///
/// This example builds the same order with and without optional contact
/// details, shows that built orders are snapshots, and runs validation.
use order_builder::*;

fn main() -> BuilderResult<()> {
    println!("=== Order Builder Demo ===\n");

    let address = Address::new("Sherlock Holmes", "221b", "Baker street", "London", "NW1 6XE");

    // Example 1: mandatory fields plus a phone number
    println!("1. Order with a phone number:");
    let builder = OrderBuilder::new("1", "violin", address).phone_number("0111111111");
    let order = builder.build();
    println!("{order}\n");

    // Example 2: adding an email later leaves the first order untouched
    println!("2. Same builder, email added afterwards:");
    let with_email = builder.email("sherlock@bakerstreet.co.uk").try_build()?;
    println!("{with_email}");
    println!("   first order email is still: {}\n", fmt::format_optional(order.email()));

    // Example 3: validation is opt-in
    println!("3. Validating a malformed email:");
    let bad = OrderBuilder::from(order).email("sherlock").build();
    match bad.validate() {
        Ok(()) => println!("   unexpectedly valid"),
        Err(err) => println!("   rejected: {err}"),
    }

    Ok(())
}
