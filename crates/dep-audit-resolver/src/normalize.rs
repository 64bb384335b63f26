//! Display normalization for module identifiers.
//!
//! Umbrella domains like `k8s.io` are vanity paths for code hosted elsewhere.
//! Reports show the hosting path instead:
//! - `k8s.io/api` -> `github.com/kubernetes/api`
//! - `gopkg.in/yaml.v2` -> `github.com/go-yaml/yaml`
//!
//! Normalization runs after lookup and only changes what is displayed.

use tracing::trace;

/// Built-in normalization rules: prefix -> replacement. Checked in order.
pub const NORMALIZATIONS: &[(&str, &str)] = &[
    ("k8s.io", "github.com/kubernetes"),
    ("gopkg.in/yaml.v2", "github.com/go-yaml/yaml"),
];

/// Path separator inside module identifiers.
const SEPARATOR: char = '/';

/// First-match prefix rewriter over an ordered rule list.
#[derive(Debug, Clone, Copy)]
pub struct NameNormalizer {
    rules: &'static [(&'static str, &'static str)],
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NameNormalizer {
    pub fn new(rules: &'static [(&'static str, &'static str)]) -> Self {
        Self { rules }
    }

    /// Normalizer over [`NORMALIZATIONS`].
    pub fn builtin() -> Self {
        Self::new(NORMALIZATIONS)
    }

    /// Rewrite `id` with the first rule whose prefix it starts with.
    ///
    /// The matched prefix is replaced everywhere it occurs in `id`, not just at
    /// the start. Later rules are never consulted once one matches.
    ///
    /// ```
    /// use dep_audit_resolver::normalize::NameNormalizer;
    ///
    /// let normalizer = NameNormalizer::builtin();
    /// assert_eq!(normalizer.normalize("k8s.io/api"), "github.com/kubernetes/api");
    /// assert_eq!(normalizer.normalize("github.com/go-ini/ini"), "github.com/go-ini/ini");
    /// ```
    pub fn normalize(&self, id: &str) -> String {
        match self.rules.iter().find(|(prefix, _)| id.starts_with(prefix)) {
            Some((prefix, replacement)) => {
                trace!(module = id, prefix = *prefix, "normalizing module name");
                id.replace(prefix, replacement)
            }
            None => id.to_string(),
        }
    }
}

/// Final path segment of an identifier.
///
/// ```
/// use dep_audit_resolver::normalize::short_name;
///
/// assert_eq!(short_name("github.com/go-yaml/yaml"), "yaml");
/// assert_eq!(short_name("nopath"), "nopath");
/// ```
pub fn short_name(id: &str) -> &str {
    id.rsplit(SEPARATOR).next().unwrap_or(id)
}
