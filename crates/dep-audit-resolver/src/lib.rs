//! Dependency Resolver
//!
//! Alias resolution, revision lookup and display normalization for module identifiers.
//!
//! This crate provides:
//! - [`alias`]: Rewrites legacy identifiers to their canonical form before lookup
//! - [`lookup`]: Joins declared constraints against locked revisions
//! - [`normalize`]: Display-only rewrite of hosting prefixes, plus short names
//!
//! # Identifier forms
//!
//! The same dependency can show up under different identifiers:
//! - The **declared** form is whatever `Gopkg.toml` names (`gopkg.in/ini.v1`)
//! - The **canonical** form is what `Gopkg.lock` pins (`github.com/go-ini/ini`)
//! - The **display** form is where the code is actually hosted (`github.com/kubernetes/api`
//!   for `k8s.io/api`)
//!
//! Aliases map declared -> canonical and affect lookup. Normalizations map
//! canonical -> display and never do.

pub mod alias;
pub mod lookup;
pub mod normalize;

pub use alias::{AliasResolver, ALIASES};
pub use lookup::{resolve_constraints, LookupOutcome, ResolvedDependency, UnresolvedConstraint};
pub use normalize::{short_name, NameNormalizer, NORMALIZATIONS};
