//! Attribute reconciliation — merging resolved imports into a rule's deps.
//!
//! [`DepsResolver`] resolves every import of one rule for one attribute
//! (usually `deps`), merges the results with the values already present,
//! and reports the imports it could not resolve. Resolution is additive:
//! hand-written entries survive unless a resolved label names the same
//! target in a different spelling.

use std::collections::{BTreeMap, BTreeSet};

use smol_str::SmolStr;

use super::diagnostics::UnresolvedDeps;
use super::index::ImportIndex;
use super::resolver::{ResolveError, ResolveResult, resolve_any_kind};
use crate::base::{Label, ResolveKind, is_well_known};
use crate::config::Config;
use crate::rule::Rule;

/// Result of reconciling one attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// New attribute value: sorted, no duplicates. Empty means the
    /// attribute should be removed.
    pub deps: Vec<String>,
    /// Imports that could not be resolved, with the reason.
    pub unresolved: UnresolvedDeps,
}

impl Resolution {
    /// Write the result back onto a rule.
    pub fn apply(self, rule: &mut Rule, attr_name: &str) {
        rule.del_attr(attr_name);
        if !self.deps.is_empty() {
            rule.set_attr(attr_name, self.deps);
        }
        rule.private.unresolved = if self.unresolved.is_empty() {
            None
        } else {
            Some(self.unresolved)
        };
    }
}

/// Resolves the imports of a rule into one of its attributes.
#[derive(Clone, Debug)]
pub struct DepsResolver {
    attr_name: SmolStr,
    exclude_wkt: bool,
}

impl DepsResolver {
    /// `exclude_wkt` skips imports of the protobuf well-known types.
    pub fn new(attr_name: impl Into<SmolStr>, exclude_wkt: bool) -> Self {
        Self {
            attr_name: attr_name.into(),
            exclude_wkt,
        }
    }

    pub fn attr_name(&self) -> &str {
        &self.attr_name
    }

    /// Resolve the imports of `rule` and rewrite its attribute in place.
    ///
    /// The kind override and the unresolved-import record travel through
    /// the rule's private state.
    pub fn resolve_rule(
        &self,
        config: &Config,
        index: &dyn ImportIndex,
        rule: &mut Rule,
        imports: &[String],
        from: &Label,
    ) {
        let resolution = self.resolve_imports(
            config,
            index,
            rule.attr_strings(&self.attr_name),
            rule.resolve_kind(),
            imports,
            from,
        );
        resolution.apply(rule, &self.attr_name);
    }

    /// Resolve `imports` for a rule at `from` and merge them with `existing`.
    pub fn resolve_imports(
        &self,
        config: &Config,
        index: &dyn ImportIndex,
        existing: &[String],
        kind: ResolveKind,
        imports: &[String],
        from: &Label,
    ) -> Resolution {
        tracing::debug!(
            "{} ({}.{}): resolving {} import(s)",
            from,
            kind,
            self.attr_name,
            imports.len()
        );

        let mut unresolved = UnresolvedDeps::new();
        // Canonical target → spelling to write; the lexically smallest wins.
        let mut resolved: BTreeMap<Label, String> = BTreeMap::new();

        for imp in imports {
            if self.exclude_wkt && is_well_known(imp) {
                continue;
            }

            let label = match resolve_any_kind(config, index, kind, imp, from) {
                Ok(ResolveResult::Found(label)) => label,
                Ok(ResolveResult::SelfImport) => {
                    tracing::trace!("{}: skipped self import {:?}", from, imp);
                    continue;
                }
                Ok(ResolveResult::NotFound) => {
                    tracing::debug!("{}: no label for {:?}", from, imp);
                    unresolved.insert(imp.as_str(), ResolveError::NoLabel);
                    continue;
                }
                Err(err) => {
                    tracing::warn!("{}: failed to resolve {:?}: {}", from, imp, err);
                    unresolved.insert(imp.as_str(), err);
                    continue;
                }
            };

            tracing::trace!("{}: {:?} is provided by {}", from, imp, label);
            let spelling = label.to_string();
            let target = label.abs(from).canonical(&config.repo_name);
            resolved
                .entry(target)
                .and_modify(|kept| {
                    if spelling < *kept {
                        *kept = spelling.clone();
                    }
                })
                .or_insert(spelling);
        }

        let mut dep_set: BTreeSet<String> = existing.iter().cloned().collect();
        for (target, spelling) in resolved {
            replace_aliases(&mut dep_set, &spelling, &target, from, &config.repo_name);
            dep_set.insert(spelling);
        }

        Resolution {
            deps: dep_set.into_iter().collect(),
            unresolved,
        }
    }
}

/// Drop entries other than `resolved` that name the canonical `target`.
fn replace_aliases(
    dep_set: &mut BTreeSet<String>,
    resolved: &str,
    target: &Label,
    from: &Label,
    default_repo: &str,
) {
    dep_set.retain(|dep| {
        if dep == resolved {
            return true;
        }
        match Label::parse(dep) {
            Ok(existing) => existing.abs(from).canonical(default_repo) != *target,
            Err(_) => true,
        }
    });
}
