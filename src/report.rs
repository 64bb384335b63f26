//! Audit report generation and CSV output.
//!
//! Output format:
//! ```text
//! Dependency,Short Name,SHA
//! github.com/go-ini/ini,ini,def456
//! github.com/kubernetes/api,api,abc123
//! ```
//!
//! Fields are never quoted or escaped. Module identifiers are path-like and
//! are not expected to contain commas; one that does will shift the columns of
//! its row.

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::debug;

use dep_audit_resolver::{short_name, NameNormalizer, ResolvedDependency};

pub const HEADER: [&str; 3] = ["Dependency", "Short Name", "SHA"];

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    /// Normalized (display) identifier.
    pub name: String,
    /// Final path segment of `name`.
    pub short_name: String,
    /// Locked revision of the canonical identifier.
    pub revision: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    records: Vec<ReportRecord>,
}

impl Report {
    /// Build display records for resolved dependencies, keeping their order.
    pub fn generate(resolved: &[ResolvedDependency], normalizer: &NameNormalizer) -> Self {
        let records = resolved
            .iter()
            .map(|dep| {
                let name = normalizer.normalize(&dep.name);
                ReportRecord {
                    short_name: short_name(&name).to_string(),
                    name,
                    revision: dep.revision.clone(),
                }
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the header and all records as unquoted CSV.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        csv.write_record(HEADER)
            .context("Failed to write report header")?;
        for record in &self.records {
            csv.write_record([
                record.name.as_str(),
                record.short_name.as_str(),
                record.revision.as_str(),
            ])
            .with_context(|| format!("Failed to write report row for {}", record.name))?;
        }
        csv.flush().context("Failed to flush report")?;
        Ok(())
    }

    /// Write the report to `path`.
    ///
    /// The content goes to a temporary file next to `path` first and replaces
    /// `path` only once fully written, so a failed run never leaves a partial report.
    /// An existing report keeps its mode; a new one is created world-readable (0644).
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create report file in {}", dir.display()))?;
        self.write_to(tmp.as_file_mut())
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        if let Some(permissions) = report_permissions(path) {
            tmp.as_file()
                .set_permissions(permissions)
                .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
        }
        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        debug!(path = %path.display(), rows = self.records.len(), "wrote report");
        Ok(())
    }
}

/// Mode the persisted report should carry.
///
/// Temporary files are created owner-only, which would otherwise leak into the report.
fn report_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
