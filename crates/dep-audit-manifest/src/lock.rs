//! Locked revisions from `Gopkg.lock`.
//!
//! Each `[[projects]]` table pins one module identifier to the revision dep
//! checked out:
//!
//! ```toml
//! [[projects]]
//!   name = "github.com/go-ini/ini"
//!   packages = ["."]
//!   revision = "20b96f641a5ea98f2f8619ff4f3e061cff4833bd"
//!   version = "v1.28.2"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ManifestError, ManifestResult};
use crate::read_manifest;

/// A single `[[projects]]` entry as decoded.
///
/// Both fields are optional at the decoding layer so a missing one can be
/// reported against its record instead of as a generic TOML error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LockedRecord {
    pub name: Option<String>,
    pub revision: Option<String>,
}

impl LockedRecord {
    pub fn new(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            revision: Some(revision.into()),
        }
    }
}

fn missing(path: &Path, index: usize, field: &str) -> ManifestError {
    ManifestError::malformed(path, format!("projects[{}]: missing `{}`", index, field))
}

#[derive(Debug, Deserialize)]
struct LockFile {
    #[serde(default)]
    projects: Vec<LockedRecord>,
}

/// Mapping from module identifier to locked revision.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RevisionStore {
    revisions: BTreeMap<String, String>,
}

impl RevisionStore {
    /// Build the store from records in source order.
    ///
    /// A later record for the same identifier replaces an earlier one.
    pub fn from_records<I>(records: I, path: &Path) -> ManifestResult<Self>
    where
        I: IntoIterator<Item = LockedRecord>,
    {
        let mut revisions = BTreeMap::new();

        for (index, record) in records.into_iter().enumerate() {
            let (name, revision) = match (record.name, record.revision) {
                (Some(name), Some(revision)) => (name, revision),
                (None, _) => return Err(missing(path, index, "name")),
                (_, None) => return Err(missing(path, index, "revision")),
            };

            if let Some(previous) = revisions.insert(name.clone(), revision) {
                debug!(
                    module = %name,
                    previous = %previous,
                    "duplicate locked project, keeping the later revision"
                );
            }
        }

        debug!(path = %path.display(), projects = revisions.len(), "built revision store");
        Ok(Self { revisions })
    }

    /// Decode `Gopkg.lock` content.
    pub fn parse(content: &str, path: &Path) -> ManifestResult<Self> {
        let lock: LockFile = toml::from_str(content)
            .map_err(|e| ManifestError::malformed(path, e.to_string()))?;
        Self::from_records(lock.projects, path)
    }

    /// Read and decode a `Gopkg.lock` file.
    pub fn load<P: AsRef<Path>>(path: P) -> ManifestResult<Self> {
        let path = path.as_ref();
        let content = read_manifest(path)?;
        Self::parse(&content, path)
    }

    /// Locked revision for an identifier.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.revisions.get(id).map(String::as_str)
    }

    /// All `(identifier, revision)` pairs, sorted by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.revisions
            .iter()
            .map(|(name, revision)| (name.as_str(), revision.as_str()))
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RevisionStore {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            revisions: iter
                .into_iter()
                .map(|(name, revision)| (name.to_string(), revision.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LOCK: &str = r#"
# This file is autogenerated, do not edit; changes may be undone by the next 'dep ensure'.

[[projects]]
  name = "github.com/go-ini/ini"
  packages = ["."]
  revision = "def456"
  version = "v1.28.2"

[[projects]]
  branch = "master"
  name = "k8s.io/api"
  packages = ["core/v1"]
  revision = "abc123"

[solve-meta]
  analyzer-name = "dep"
  analyzer-version = 1
  inputs-digest = "e0b1"
  solver-name = "gps-cdcl"
  solver-version = 1
"#;

    #[test]
    fn test_parse_lock() {
        let store = RevisionStore::parse(LOCK, Path::new("Gopkg.lock")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("k8s.io/api"), Some("abc123"));
        assert_eq!(store.get("github.com/go-ini/ini"), Some("def456"));
        assert_eq!(store.get("gopkg.in/ini.v1"), None);
    }

    #[test]
    fn test_duplicate_last_wins() {
        let records = vec![
            LockedRecord::new("k8s.io/api", "first"),
            LockedRecord::new("k8s.io/client-go", "other"),
            LockedRecord::new("k8s.io/api", "second"),
        ];
        let store = RevisionStore::from_records(records, Path::new("Gopkg.lock")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("k8s.io/api"), Some("second"));
    }

    #[test]
    fn test_missing_revision_is_malformed() {
        let content = r#"
[[projects]]
  name = "k8s.io/api"
  revision = "abc123"

[[projects]]
  name = "github.com/golang/glog"
  version = "v1.0.0"
"#;
        let err = RevisionStore::parse(content, Path::new("Gopkg.lock")).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("projects[1]: missing `revision`"));
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let content = "[[projects]]\n  revision = \"abc123\"\n";
        let err = RevisionStore::parse(content, Path::new("Gopkg.lock")).unwrap_err();
        assert!(err.to_string().contains("projects[0]: missing `name`"));
    }

    #[test]
    fn test_invalid_toml_is_malformed() {
        let err =
            RevisionStore::parse("[[projects]\nname =", Path::new("Gopkg.lock")).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_no_projects_is_empty() {
        let content = "[solve-meta]\n  solver-version = 1\n";
        let store = RevisionStore::parse(content, Path::new("Gopkg.lock")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io() {
        let tmp = TempDir::new().unwrap();
        let err = RevisionStore::load(tmp.path().join("Gopkg.lock")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Gopkg.lock");
        fs::write(&path, LOCK).unwrap();

        let store = RevisionStore::load(&path).unwrap();
        let ids: Vec<&str> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["github.com/go-ini/ini", "k8s.io/api"]);
    }
}
