//! dep-audit: verify the exact revision of explicit third-party dependencies.
//!
//! ```bash
//! # In a dep project root, writes ./audit.csv
//! dep-audit
//!
//! # Elsewhere, failing when a constraint is not locked
//! dep-audit -C path/to/project --strict
//! ```

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dep_audit::args::Args;
use dep_audit::{run, AuditConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AuditConfig::from_args(&args);

    println!("Generating CSV of dependencies");
    let summary = run(&config)?;
    println!(
        "Wrote {} dependencies to {}",
        summary.resolved,
        summary.output.display()
    );

    if config.strict && !summary.is_complete() {
        return Err(anyhow!(
            "{} constraint(s) have no locked revision (--strict)",
            summary.unresolved.len()
        ));
    }

    Ok(())
}
