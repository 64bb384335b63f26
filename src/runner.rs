//! Audit pipeline.
//!
//! Loads both manifests, resolves constraints, reports misses and writes the
//! CSV. Manifest and write failures abort the run before any report exists.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use dep_audit_manifest::{ConstraintSet, RevisionStore};
use dep_audit_resolver::{resolve_constraints, UnresolvedConstraint};

use crate::config::AuditConfig;
use crate::report::Report;

/// What one run produced.
#[derive(Debug, Clone)]
pub struct AuditSummary {
    pub output: PathBuf,
    pub resolved: usize,
    pub unresolved: Vec<UnresolvedConstraint>,
}

impl AuditSummary {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Build the report in memory without touching the output path.
pub fn build_report(config: &AuditConfig) -> Result<(Report, Vec<UnresolvedConstraint>)> {
    let store = RevisionStore::load(&config.lock_path).with_context(|| {
        format!(
            "Failed to load locked revisions from {}",
            config.lock_path.display()
        )
    })?;
    let constraints = ConstraintSet::load(&config.manifest_path).with_context(|| {
        format!(
            "Failed to load constraints from {}",
            config.manifest_path.display()
        )
    })?;
    info!(
        locked = store.len(),
        constraints = constraints.len(),
        "loaded manifests"
    );

    let outcome = resolve_constraints(&constraints, &store, &config.aliases);
    let report = Report::generate(&outcome.resolved, &config.normalizer);
    Ok((report, outcome.unresolved))
}

/// Run a full audit: build the report, print one warning per skipped
/// constraint, then write the CSV.
pub fn run(config: &AuditConfig) -> Result<AuditSummary> {
    let (report, unresolved) = build_report(config)?;

    for miss in &unresolved {
        eprintln!("Warning: {}", miss);
    }

    report.write_file(&config.output_path)?;
    info!(
        path = %config.output_path.display(),
        rows = report.len(),
        skipped = unresolved.len(),
        "audit complete"
    );

    Ok(AuditSummary {
        output: config.output_path.clone(),
        resolved: report.len(),
        unresolved,
    })
}
