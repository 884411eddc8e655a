//! # protodeps
//!
//! Dependency resolution for generated protobuf build rules: given a rule
//! and the imports its sources declare, decide which other targets it must
//! depend on.
//!
//! ## Module Structure
//!
//! ```text
//! project → Workspace of generated rules, parallel resolution pass
//!   ↓
//! resolve → Overrides, reverse index, resolver, attribute reconciler
//!   ↓
//! rule    → In-memory build rule model
//!   ↓
//! config  → Repository name + override table (YAML, directives)
//!   ↓
//! base    → Primitives (Label, ResolveKind, ImportSpec)
//! ```

/// Foundation types: Label, ResolveKind, ImportSpec
pub mod base;

pub mod config;

/// Import resolution: index, overrides, resolver, reconciler
pub mod resolve;

pub mod rule;

pub mod project;

pub use base::{ImportSpec, Label, LabelError, ResolveKind};
pub use config::{Config, ConfigError};
pub use resolve::{DepsResolver, ImportIndex, Resolution, ResolveError, ResolveResult, RuleIndex};
pub use rule::Rule;
