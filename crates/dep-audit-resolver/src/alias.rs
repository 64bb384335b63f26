//! Identifier aliases.
//!
//! Some projects are declared under a vanity import path but locked under their
//! repository path. The alias table maps the former to the latter so lookup
//! succeeds.

/// Built-in aliases: declared identifier -> canonical identifier.
pub const ALIASES: &[(&str, &str)] = &[("gopkg.in/ini.v1", "github.com/go-ini/ini")];

/// Exact-match rewriter over a fixed alias table.
#[derive(Debug, Clone, Copy)]
pub struct AliasResolver {
    table: &'static [(&'static str, &'static str)],
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasResolver {
    pub fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        Self { table }
    }

    /// Resolver over [`ALIASES`].
    pub fn builtin() -> Self {
        Self::new(ALIASES)
    }

    /// Canonical form of `id`, or `id` itself when it has no alias.
    pub fn resolve<'a>(&self, id: &'a str) -> &'a str {
        self.table
            .iter()
            .find(|(from, _)| *from == id)
            .map(|(_, to)| *to)
            .unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_alias() {
        let aliases = AliasResolver::builtin();
        assert_eq!(aliases.resolve("gopkg.in/ini.v1"), "github.com/go-ini/ini");
    }

    #[test]
    fn test_unknown_passes_through() {
        let aliases = AliasResolver::builtin();
        assert_eq!(aliases.resolve("k8s.io/api"), "k8s.io/api");
    }

    #[test]
    fn test_exact_match_only() {
        let aliases = AliasResolver::builtin();
        assert_eq!(aliases.resolve("gopkg.in/ini.v1/sub"), "gopkg.in/ini.v1/sub");
        assert_eq!(aliases.resolve("gopkg.in/ini"), "gopkg.in/ini");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let aliases = AliasResolver::builtin();
        for (from, to) in ALIASES {
            let once = aliases.resolve(from);
            assert_eq!(once, *to);
            assert_eq!(aliases.resolve(once), once);
        }
    }

    #[test]
    fn test_custom_table() {
        static TABLE: &[(&str, &str)] = &[("a/old", "a/new")];
        let aliases = AliasResolver::new(TABLE);
        assert_eq!(aliases.resolve("a/old"), "a/new");
        assert_eq!(aliases.resolve("gopkg.in/ini.v1"), "gopkg.in/ini.v1");
    }
}
