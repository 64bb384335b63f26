//! Gopkg manifest decoding.
//!
//! This crate provides:
//! - [`lock`]: `Gopkg.lock` projects as a [`RevisionStore`] (module identifier -> revision)
//! - [`constraints`]: `Gopkg.toml` constraints as an ordered [`ConstraintSet`]
//! - [`error`]: [`ManifestError`] shared by both decoders
//!
//! Both decoders only extract the fields the audit needs. Everything else dep
//! writes into these files (versions, branches, prune options, solve metadata)
//! is accepted and ignored.

pub mod constraints;
pub mod error;
pub mod lock;

pub use constraints::{ConstraintRecord, ConstraintSet};
pub use error::{ManifestError, ManifestResult};
pub use lock::{LockedRecord, RevisionStore};

use std::fs;
use std::path::Path;

/// Read a manifest file into memory.
pub(crate) fn read_manifest(path: &Path) -> ManifestResult<String> {
    fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}
