//! Greetsum CLI - greet, count, and sum a parity-weighted range
//!
//! This is the main entry point for the greetsum command-line interface.
//! Run without arguments it prints the canonical five-line transcript:
//!
//! ```text
//! Hello, world
//! i: 0
//! i: 1
//! i: 2
//! value: 70
//! ```
//!
//! ## Commands
//!
//! ### `greet` - Print a greeting for a name
//!
//! ### `sum` - Compute the parity-weighted sum over `0..n`
//! Even values of `i` contribute `i`, odd values contribute `i * 2`.
//!
//! ### `run` - Run the full sequence with optional overrides
//! Name and bound default to `config.yaml` in the current directory, or
//! the built-in `"world"` and `10` when no file exists.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Control logging verbosity (logs go to stderr)

use anyhow::Result;
use clap::{Parser, Subcommand};
use greetsum::{accumulate, greet, init_logging, Config, EntrySequence};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Greets, counts, and sums a parity-weighted range", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a greeting for the given name
    Greet {
        /// Name to greet (may be empty)
        name: String,
    },

    /// Compute the parity-weighted sum over 0..n
    Sum {
        /// Exclusive upper bound of the range
        #[arg(allow_hyphen_values = true)]
        n: i64,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Run the full sequence with optional overrides
    Run {
        /// Name to greet (defaults to config value)
        #[arg(short, long)]
        name: Option<String>,

        /// Accumulator bound (defaults to config value)
        #[arg(short, long)]
        bound: Option<i64>,
    },
}

#[derive(Serialize)]
struct SumOutput {
    n: i64,
    total: i64,
}

fn main() -> Result<()> {
    init_logging(Some("warn"));

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Greet { name }) => {
            greet(&name)?;
        }

        Some(Commands::Sum { n, json }) => {
            let total = accumulate(n);
            if json {
                println!("{}", serde_json::to_string_pretty(&SumOutput { n, total })?);
            } else {
                println!("value: {}", total);
            }
        }

        Some(Commands::Run { name, bound }) => {
            let config = Config::load().unwrap_or_default();
            let sequence = EntrySequence::new()
                .with_name(name.unwrap_or(config.run.name))
                .with_bound(bound.unwrap_or(config.run.bound));

            info!("Running sequence for {} with bound {}", sequence.name, sequence.bound);
            let stdout = std::io::stdout();
            sequence.run(&mut stdout.lock())?;
        }

        None => {
            // No command specified, run the canonical sequence
            let stdout = std::io::stdout();
            EntrySequence::new().run(&mut stdout.lock())?;
        }
    }

    Ok(())
}
