//! # Parklot - Grid Parking Lot Attendant
//!
//! The main binary for the Parklot facility model.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/parklot (THE BINARY)                │
//! │                                                          │
//! │   ┌─────────────┐   ┌──────────────┐   ┌─────────────┐   │
//! │   │    CLI      │   │  Attendant   │   │   Config    │   │
//! │   │   (clap)    │   │    Menu      │   │   (toml)    │   │
//! │   └──────┬──────┘   └──────┬───────┘   └──────┬──────┘   │
//! │          └─────────────────┼──────────────────┘          │
//! │                            ▼                             │
//! │                   ┌────────────────┐                     │
//! │                   │  parklot-core  │                     │
//! │                   │  (THE LOGIC)   │                     │
//! │                   └────────────────┘                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu on a 10x10 lot
//! parklot
//!
//! # Smaller lot, JSON results
//! parklot run --rows 3 --cols 3 --json-mode
//!
//! # Price a 90 minute stay
//! parklot fare --hours 1.5
//! ```

use clap::Parser;
use parklot::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing: PARKLOT_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout belongs to the menu.
    let log_format = std::env::var("PARKLOT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "parklot=debug"
    } else {
        "parklot=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Parklot startup banner.
fn print_banner() {
    println!(
        r#"
  ┌───┬───┬───┬───┐
  │ C │   │ T │   │   PARKLOT v{}
  ├───┼───┼───┼───┤
  │   │ M │   │ C │   Check in • Check out • Pay
  └───┴───┴───┴───┘
"#,
        env!("CARGO_PKG_VERSION")
    );
}
