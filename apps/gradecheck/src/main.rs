//! # Gradecheck - PASS/FAIL Grade Classifier
//!
//! The main binary for Gradecheck.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              apps/gradecheck (THE BINARY)         │
//! │                                                  │
//! │   stdin / --input ──▶ CLI (clap) ──▶ stdout      │
//! │                         │                        │
//! │                         ▼                        │
//! │                 ┌─────────────────┐              │
//! │                 │ gradecheck-core │              │
//! │                 │   (THE LOGIC)   │              │
//! │                 └─────────────────┘              │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Grade standard input
//! printf '2\n8 5 0 6.0 7.0\n7 5 0 6.0 7.0\n' | gradecheck
//!
//! # Grade a file with a custom policy, JSON output
//! gradecheck --input scores.txt --policy strict.toml --json-mode
//!
//! # Show the effective policy
//! gradecheck policy
//! ```

use clap::Parser;
use gradecheck::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr — stdout is reserved for verdicts.
///
/// GRADECHECK_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format =
        std::env::var("GRADECHECK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "gradecheck=debug"
    } else {
        "gradecheck=warn"
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
}
