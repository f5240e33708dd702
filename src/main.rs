//! replmap - compose circuit edit scripts
//!
//! Runs an edit script, commits whatever step is still pending, and prints
//! the composed replacement relation.
//!
//! # Usage
//!
//! ```bash
//! REPLMAP_LOG=debug replmap edits.rpl --check
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use replacement_core::{dsl, error::Result, relation::validate_relation, EditSession};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Circuit edit composer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the edit script
    #[arg(value_name = "SCRIPT_FILE")]
    script_file: PathBuf,

    /// Print the inverse of the composed relation
    #[arg(short, long)]
    inverse: bool,

    /// Validate the composed relation before printing
    #[arg(short, long)]
    check: bool,

    /// Log filter directive
    #[arg(long, env = "REPLMAP_LOG", default_value = "warn")]
    log_filter: String,
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_filter);

    // Parse the script
    let script = dsl::parse_file(&args.script_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Run it
    let mut session = EditSession::new();
    session.run(&script, &mut out)?;
    session.commit()?;

    if args.check {
        validate_relation(session.combined())?;
    }

    for diagnostic in session.diagnostics() {
        warn!(%diagnostic, "replmap.diagnostic");
    }

    session.print(args.inverse, &mut out)?;
    out.flush()?;

    Ok(())
}
