use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{DEFAULT_LOCK_PATH, DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Debug, Parser)]
#[command(
    name = "dep-audit",
    author,
    version,
    about = "Report the pinned revision of every explicit dependency",
    long_about = "Joins the constraints declared in Gopkg.toml with the revisions pinned in \
                  Gopkg.lock and writes one CSV row per resolved dependency.\n\n\
                  Constraints with no locked revision are reported on stderr and skipped."
)]
pub struct Args {
    /// Locked manifest (dep lock file).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOCK_PATH)]
    pub lock: PathBuf,

    /// Constraint manifest (dep manifest).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Where to write the CSV report.
    #[arg(long, short, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Resolve relative --lock/--manifest/--output paths against this directory.
    #[arg(long = "dir", short = 'C', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Exit non-zero when any constraint has no locked revision.
    /// The report is still written.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default `tracing` filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
