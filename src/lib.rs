//! Dependency Audit
//!
//! Reports the exact pinned revision of every explicit dependency a Go `dep`
//! project declares:
//!
//! - **Manifests**: `Gopkg.toml` constraints and `Gopkg.lock` revisions
//!   (see [`dep_audit_manifest`])
//! - **Resolution**: aliasing, lookup and display normalization (see [`dep_audit_resolver`])
//! - **Report**: one CSV row per resolved constraint, in declaration order (see [`report`])
//!
//! See [`runner::run`] for the full pipeline.

pub mod args;
pub mod config;
pub mod report;
pub mod runner;

pub use config::AuditConfig;
pub use report::{Report, ReportRecord};
pub use runner::{build_report, run, AuditSummary};
