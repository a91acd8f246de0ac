use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use order_builder::{Address, OrderBuilder};
use std::io::{self, IsTerminal};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "order-builder")]
#[command(about = "Build a shipping order and print it")]
#[command(version)]
struct Cli {
    /// Order identifier
    #[arg(long)]
    id: String,

    /// Name of the purchased item
    #[arg(long)]
    article: String,

    /// Recipient name
    #[arg(long)]
    name: String,

    /// Street number, e.g. "221b"
    #[arg(long)]
    number: String,

    /// Street name
    #[arg(long)]
    street: String,

    /// City name
    #[arg(long)]
    city: String,

    /// Postal code
    #[arg(long)]
    zip_code: String,

    /// Contact phone number
    #[arg(long)]
    phone_number: Option<String>,

    /// Contact email
    #[arg(long)]
    email: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", env = "ORDER_BUILDER_OUTPUT")]
    output: OutputFormat,

    /// Reject orders with empty mandatory fields or malformed contact details
    #[arg(long)]
    validate: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ORDER_BUILDER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let address = Address::new(cli.name, cli.number, cli.street, cli.city, cli.zip_code);

    let mut builder = OrderBuilder::new(cli.id, cli.article, address);
    if let Some(phone_number) = cli.phone_number {
        builder = builder.phone_number(phone_number);
    }
    if let Some(email) = cli.email {
        builder = builder.email(email);
    }

    let order = if cli.validate {
        builder.try_build().context("order validation failed")?
    } else {
        builder.build()
    };
    debug!(format = ?cli.output, "rendering order");

    match cli.output {
        OutputFormat::Text => println!("{order}"),
        OutputFormat::Json => {
            let json = order.to_json().context("failed to serialize order")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
