//! Single-import resolution.
//!
//! Answers "which label provides this import for this kind of rule?".
//! The override table is consulted first; if it has no entry, the reverse
//! index is queried and its candidates classified.

use thiserror::Error;

use super::index::{ImportIndex, IndexError};
use crate::base::{ImportSpec, Label, ResolveKind};
use crate::config::Config;

/// Why an import could not be turned into a dependency.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Neither an override nor an index entry provides the import.
    #[error("no label")]
    NoLabel,
    /// More than one distinct rule provides the import.
    #[error("multiple rules ({first} and {second}) may be imported with {imp:?} from {from}")]
    Ambiguous {
        first: Label,
        second: Label,
        imp: String,
        from: Label,
    },
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Outcome of resolving one import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Resolved to a label, already rewritten relative to the requesting rule.
    Found(Label),
    /// The import is provided by the requesting rule itself.
    SelfImport,
    /// Nothing provides the import.
    NotFound,
}

impl ResolveResult {
    /// Get the resolved label, if any.
    pub fn label(&self) -> Option<&Label> {
        match self {
            ResolveResult::Found(label) => Some(label),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolveResult::Found(_))
    }
}

/// Resolve `imp` for a rule of `kind` located at `from`.
pub fn resolve_any_kind(
    config: &Config,
    index: &dyn ImportIndex,
    kind: ResolveKind,
    imp: &str,
    from: &Label,
) -> Result<ResolveResult, ResolveError> {
    if let Some(label) = config.overrides.lookup(kind, imp) {
        tracing::trace!("{}: override hit for {:?} -> {}", from, imp, label);
        return Ok(ResolveResult::Found(label.rel(&from.repo, &from.pkg)));
    }
    resolve_with_index(config, index, &ImportSpec::new(kind, imp), from)
}

fn resolve_with_index(
    config: &Config,
    index: &dyn ImportIndex,
    spec: &ImportSpec,
    from: &Label,
) -> Result<ResolveResult, ResolveError> {
    let candidates = index.find_candidates(spec)?;
    if candidates.is_empty() {
        return Ok(ResolveResult::NotFound);
    }

    let mut self_import = false;
    let mut distinct: Vec<Label> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.same_target(from, &config.repo_name) {
            self_import = true;
            continue;
        }
        if distinct
            .iter()
            .any(|seen| seen.same_target(&candidate, &config.repo_name))
        {
            continue;
        }
        distinct.push(candidate);
    }

    match distinct.as_slice() {
        [] if self_import => Ok(ResolveResult::SelfImport),
        [] => Ok(ResolveResult::NotFound),
        [only] => Ok(ResolveResult::Found(only.rel(&from.repo, &from.pkg))),
        [first, second, ..] => Err(ResolveError::Ambiguous {
            first: first.clone(),
            second: second.clone(),
            imp: spec.imp.to_string(),
            from: from.clone(),
        }),
    }
}
