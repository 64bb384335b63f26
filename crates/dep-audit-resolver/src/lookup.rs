//! Constraint lookup against locked revisions.

use std::collections::BTreeSet;

use dep_audit_manifest::{ConstraintSet, RevisionStore};
use tracing::debug;

use crate::alias::AliasResolver;

/// A constraint that resolved to a locked revision.
///
/// `name` is the canonical (post-alias) identifier, before any display
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub name: String,
    pub revision: String,
}

/// A constraint with no locked revision, after alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedConstraint {
    pub name: String,
}

impl std::fmt::Display for UnresolvedConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not find revision for {}", self.name)
    }
}

/// Result of joining a constraint set with a revision store.
///
/// Both lists follow constraint declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOutcome {
    pub resolved: Vec<ResolvedDependency>,
    pub unresolved: Vec<UnresolvedConstraint>,
}

/// Resolve every declared constraint to its locked revision.
///
/// Misses are collected rather than treated as errors so the remaining
/// constraints still resolve. Each canonical identifier appears at most once
/// across both lists, at the position of its first declaration.
pub fn resolve_constraints(
    constraints: &ConstraintSet,
    store: &RevisionStore,
    aliases: &AliasResolver,
) -> LookupOutcome {
    let mut outcome = LookupOutcome::default();
    let mut seen = BTreeSet::new();

    for declared in constraints.iter() {
        let name = aliases.resolve(declared);
        if name != declared {
            debug!(declared, canonical = name, "resolved alias");
        }
        if !seen.insert(name) {
            debug!(declared, canonical = name, "skipping repeated constraint");
            continue;
        }

        match store.get(name) {
            Some(revision) => outcome.resolved.push(ResolvedDependency {
                name: name.to_string(),
                revision: revision.to_string(),
            }),
            None => outcome.unresolved.push(UnresolvedConstraint {
                name: name.to_string(),
            }),
        }
    }

    debug!(
        resolved = outcome.resolved.len(),
        unresolved = outcome.unresolved.len(),
        "resolved constraints"
    );
    outcome
}
