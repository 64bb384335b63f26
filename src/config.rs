//! Run configuration.

use std::path::{Path, PathBuf};

use dep_audit_resolver::{AliasResolver, NameNormalizer};

use crate::args::Args;

pub const DEFAULT_LOCK_PATH: &str = "Gopkg.lock";
pub const DEFAULT_MANIFEST_PATH: &str = "Gopkg.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "audit.csv";

/// Everything one audit run needs.
///
/// Paths are used as given, so relative ones resolve against the process
/// working directory unless [`AuditConfig::with_base_dir`] was applied.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub lock_path: PathBuf,
    pub manifest_path: PathBuf,
    pub output_path: PathBuf,
    /// Fail the run (after writing the report) when constraints are skipped.
    pub strict: bool,
    pub aliases: AliasResolver,
    pub normalizer: NameNormalizer,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            lock_path: PathBuf::from(DEFAULT_LOCK_PATH),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            strict: false,
            aliases: AliasResolver::builtin(),
            normalizer: NameNormalizer::builtin(),
        }
    }
}

impl AuditConfig {
    pub fn from_args(args: &Args) -> Self {
        let config = Self {
            lock_path: args.lock.clone(),
            manifest_path: args.manifest.clone(),
            output_path: args.output.clone(),
            strict: args.strict,
            ..Self::default()
        };
        match &args.dir {
            Some(dir) => config.with_base_dir(dir),
            None => config,
        }
    }

    /// Re-root relative paths under `base`. Absolute paths are kept.
    pub fn with_base_dir(mut self, base: &Path) -> Self {
        self.lock_path = base.join(&self.lock_path);
        self.manifest_path = base.join(&self.manifest_path);
        self.output_path = base.join(&self.output_path);
        self
    }
}
