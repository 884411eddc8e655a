//! Diagnostics — reporting imports that could not be resolved.
//!
//! Unresolved imports never abort a pass. Each rule carries an
//! [`UnresolvedDeps`] record, and the [`DiagnosticCollector`] turns those
//! records into reportable diagnostics.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::index::IndexError;
use super::resolver::ResolveError;
use crate::base::Label;

// ============================================================================
// UNRESOLVED IMPORTS
// ============================================================================

/// Mapping from import string to the reason it was not resolved.
///
/// Ordered by import so reports are stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnresolvedDeps {
    entries: BTreeMap<String, ResolveError>,
}

impl UnresolvedDeps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record why an import was not resolved.
    pub fn insert(&mut self, imp: impl Into<String>, reason: ResolveError) {
        self.entries.insert(imp.into(), reason);
    }

    pub fn get(&self, imp: &str) -> Option<&ResolveError> {
        self.entries.get(imp)
    }

    pub fn contains(&self, imp: &str) -> bool {
        self.entries.contains_key(imp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolveError)> {
        self.entries.iter().map(|(imp, reason)| (imp.as_str(), reason))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// Standard diagnostic codes for unresolved imports.
pub mod codes {
    /// No rule provides the import.
    pub const UNRESOLVED_IMPORT: &str = "E0001";
    /// Several rules provide the import.
    pub const AMBIGUOUS_IMPORT: &str = "E0002";
    /// The index lookup itself failed.
    pub const INDEX_LOOKUP: &str = "E0003";
}

/// A diagnostic about one import of one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule whose import failed.
    pub rule: Label,
    /// The import string.
    pub import: Arc<str>,
    pub severity: Severity,
    pub code: &'static str,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Build the diagnostic for an unresolved import.
    pub fn unresolved(rule: &Label, imp: &str, reason: &ResolveError) -> Self {
        let (severity, code) = match reason {
            ResolveError::NoLabel => (Severity::Warning, codes::UNRESOLVED_IMPORT),
            ResolveError::Ambiguous { .. } => (Severity::Error, codes::AMBIGUOUS_IMPORT),
            ResolveError::Index(IndexError::Unfinished(_) | IndexError::Lookup { .. }) => {
                (Severity::Error, codes::INDEX_LOOKUP)
            }
        };
        Self {
            rule: rule.clone(),
            import: Arc::from(imp),
            severity,
            code,
            message: Arc::from(format!("unresolved import {:?}: {}", imp, reason)),
        }
    }
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a resolution pass.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add one diagnostic per unresolved import of `rule`.
    pub fn unresolved(&mut self, rule: &Label, unresolved: &UnresolvedDeps) {
        for (imp, reason) in unresolved.iter() {
            self.add(Diagnostic::unresolved(rule, imp, reason));
        }
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error).count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning).count()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
