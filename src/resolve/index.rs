//! Reverse import index — which rules provide which imports.
//!
//! The index is filled during the generation phase (every generated rule
//! registers the import specs it provides) and sealed with
//! [`RuleIndex::finish`] before the resolution phase starts. During
//! resolution it is only ever read.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::base::{ImportSpec, Label};

/// Errors from an index lookup (other than "nothing found", which is an
/// empty candidate list).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("rule index queried for {0} before it was finished")]
    Unfinished(ImportSpec),
    #[error("rule index lookup for {spec} failed: {message}")]
    Lookup { spec: ImportSpec, message: String },
}

/// Lookup interface the resolver consumes.
///
/// Implementations must be safe to query from several threads at once;
/// lookups must be stable for the duration of one resolution pass.
pub trait ImportIndex: Sync {
    /// All rules registered as providing `spec`, in registration order.
    fn find_candidates(&self, spec: &ImportSpec) -> Result<Vec<Label>, IndexError>;
}

/// In-memory reverse index keyed by [`ImportSpec`].
#[derive(Clone, Debug, Default)]
pub struct RuleIndex {
    /// Import spec → rules providing it.
    by_import: FxHashMap<ImportSpec, IndexSet<Label>>,
    /// Rule → import specs it registered (for removal).
    by_rule: FxHashMap<Label, Vec<ImportSpec>>,
    /// Set whenever the index changes; cleared by `finish`.
    dirty: bool,
}

impl RuleIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the import specs provided by a rule.
    ///
    /// Calling this again for the same rule adds to its existing specs.
    pub fn add_rule(&mut self, label: Label, specs: impl IntoIterator<Item = ImportSpec>) {
        self.dirty = true;
        let registered = self.by_rule.entry(label.clone()).or_default();
        for spec in specs {
            let providers = self.by_import.entry(spec.clone()).or_default();
            if providers.insert(label.clone()) {
                registered.push(spec);
            }
        }
    }

    /// Remove every import spec registered by a rule.
    pub fn remove_rule(&mut self, label: &Label) {
        let Some(specs) = self.by_rule.remove(label) else {
            return;
        };
        self.dirty = true;
        for spec in specs {
            if let Some(providers) = self.by_import.get_mut(&spec) {
                providers.shift_remove(label);
                if providers.is_empty() {
                    self.by_import.remove(&spec);
                }
            }
        }
    }

    /// Seal the index for lookups.
    pub fn finish(&mut self) {
        if self.dirty {
            tracing::debug!(
                "rule index finished: {} rule(s), {} import spec(s)",
                self.by_rule.len(),
                self.by_import.len()
            );
        }
        self.dirty = false;
    }

    /// Check whether the index has been sealed since its last change.
    pub fn is_finished(&self) -> bool {
        !self.dirty
    }

    /// Number of rules registered.
    pub fn rule_count(&self) -> usize {
        self.by_rule.len()
    }

    /// Number of distinct import specs registered.
    pub fn len(&self) -> usize {
        self.by_import.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_import.is_empty()
    }
}

impl ImportIndex for RuleIndex {
    fn find_candidates(&self, spec: &ImportSpec) -> Result<Vec<Label>, IndexError> {
        if self.dirty {
            return Err(IndexError::Unfinished(spec.clone()));
        }
        Ok(self
            .by_import
            .get(spec)
            .map(|providers| providers.iter().cloned().collect())
            .unwrap_or_default())
    }
}
