//! Foundation types for dependency resolution.
//!
//! This module provides the vocabulary shared by every other layer:
//! - [`Label`] - Target references and their canonical forms
//! - [`ResolveKind`] - The closed set of rule kinds that resolve imports
//! - [`ImportSpec`] - `(kind, import)` keys for the index and overrides
//!
//! This module has NO dependencies on other protodeps modules.

mod import;
mod kind;
mod label;

pub use import::{ImportSpec, WELL_KNOWN_TYPES_PREFIX, is_well_known, join_import_path, strip_rel};
pub use kind::{ResolveKind, UnknownKind};
pub use label::{Label, LabelError};
