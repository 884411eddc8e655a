//! Workspace management — the set of generated rules resolved in one pass.

mod workspace;

pub use workspace::{GeneratedRule, Workspace, WorkspaceError};
