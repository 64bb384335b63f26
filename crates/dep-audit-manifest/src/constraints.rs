//! Declared constraints from `Gopkg.toml`.
//!
//! Only `[[constraint]]` tables count as explicit dependencies. `[[override]]`,
//! `required`, `ignored` and `[prune]` are left alone.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ManifestError, ManifestResult};
use crate::read_manifest;

/// A single `[[constraint]]` entry as decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConstraintRecord {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    constraint: Vec<ConstraintRecord>,
}

/// Requested module identifiers in declaration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    names: Vec<String>,
}

impl ConstraintSet {
    pub fn from_records<I>(records: I, path: &Path) -> ManifestResult<Self>
    where
        I: IntoIterator<Item = ConstraintRecord>,
    {
        let names = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.name.ok_or_else(|| {
                    ManifestError::malformed(
                        path,
                        format!("constraint[{}]: missing `name`", index),
                    )
                })
            })
            .collect::<ManifestResult<Vec<_>>>()?;

        debug!(path = %path.display(), constraints = names.len(), "built constraint set");
        Ok(Self { names })
    }

    /// Decode `Gopkg.toml` content.
    pub fn parse(content: &str, path: &Path) -> ManifestResult<Self> {
        let manifest: ManifestFile = toml::from_str(content)
            .map_err(|e| ManifestError::malformed(path, e.to_string()))?;
        Self::from_records(manifest.constraint, path)
    }

    /// Read and decode a `Gopkg.toml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> ManifestResult<Self> {
        let path = path.as_ref();
        let content = read_manifest(path)?;
        Self::parse(&content, path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
required = ["k8s.io/code-generator/cmd/client-gen"]

[[constraint]]
  name = "gopkg.in/ini.v1"
  version = "1.28.0"

[[constraint]]
  name = "k8s.io/api"
  branch = "release-1.8"

[[override]]
  name = "github.com/golang/protobuf"
  revision = "1643683e1b54a9e88ad26d98f81400c8c9d9f4f9"

[[constraint]]
  name = "github.com/missing/dep"
  revision = "0db4a6252e5f"

[prune]
  go-tests = true
"#;

    #[test]
    fn test_parse_preserves_order() {
        let set = ConstraintSet::parse(MANIFEST, Path::new("Gopkg.toml")).unwrap();
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(
            names,
            vec!["gopkg.in/ini.v1", "k8s.io/api", "github.com/missing/dep"]
        );
    }

    #[test]
    fn test_overrides_are_not_constraints() {
        let set = ConstraintSet::parse(MANIFEST, Path::new("Gopkg.toml")).unwrap();
        assert!(!set.iter().any(|n| n == "github.com/golang/protobuf"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let content = r#"
[[constraint]]
  name = "k8s.io/api"

[[constraint]]
  version = "1.0.0"
"#;
        let err = ConstraintSet::parse(content, Path::new("Gopkg.toml")).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("constraint[1]: missing `name`"));
    }

    #[test]
    fn test_no_constraints_is_empty() {
        let content = "[prune]\n  go-tests = true\n";
        let set = ConstraintSet::parse(content, Path::new("Gopkg.toml")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Gopkg.toml");
        fs::write(&path, MANIFEST).unwrap();
        assert_eq!(ConstraintSet::load(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io() {
        let tmp = TempDir::new().unwrap();
        let err = ConstraintSet::load(tmp.path().join("Gopkg.toml")).unwrap_err();
        assert!(!err.is_malformed());
    }
}
