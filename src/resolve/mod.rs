//! Import resolution — turning import strings into dependency labels.
//!
//! ## Components (leaf-first)
//!
//! - [`OverrideTable`] - operator-supplied `(kind, import) → label` mappings
//! - [`ImportIndex`] / [`RuleIndex`] - reverse index of which rules provide
//!   which imports
//! - [`resolve_any_kind`] - resolves one import to at most one label
//! - [`DepsResolver`] - resolves every import of a rule and merges the
//!   result into one of its attributes
//! - [`proto_library_import_specs_for_kind`] - projects libraries onto the
//!   index key shape
//!
//! Resolution never mutates the index or the config, so rules may be
//! resolved concurrently.

mod diagnostics;
mod index;
mod overrides;
mod reconcile;
mod resolver;
mod specs;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, UnresolvedDeps, codes};
pub use index::{ImportIndex, IndexError, RuleIndex};
pub use overrides::OverrideTable;
pub use reconcile::{DepsResolver, Resolution};
pub use resolver::{ResolveError, ResolveResult, resolve_any_kind};
pub use specs::{
    ProtoFile, ProtoLibrary, proto_files_import_specs_for_kind, proto_library_import_specs_for_kind,
};
