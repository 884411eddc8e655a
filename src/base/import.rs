//! Import identifiers and the keys built from them.

use std::fmt;

use smol_str::SmolStr;

use super::ResolveKind;

/// Imports under this prefix are the protobuf well-known types.
pub const WELL_KNOWN_TYPES_PREFIX: &str = "google/protobuf/";

/// Check whether an import names a well-known type.
pub fn is_well_known(imp: &str) -> bool {
    imp.starts_with(WELL_KNOWN_TYPES_PREFIX)
}

/// Key for the reverse index and the override table.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ImportSpec {
    pub kind: ResolveKind,
    pub imp: SmolStr,
}

impl ImportSpec {
    pub fn new(kind: ResolveKind, imp: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            imp: imp.into(),
        }
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.imp)
    }
}

/// Join a directory and a base filename with `/`.
///
/// An empty or `.` directory yields the basename alone.
pub fn join_import_path(dir: &str, basename: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let dir = dir.strip_prefix("./").unwrap_or(dir);
    if dir.is_empty() || dir == "." {
        return basename.to_string();
    }
    format!("{}/{}", dir, basename)
}

/// Remove the `rel` package prefix from a filename, if it has one.
pub fn strip_rel<'a>(rel: &str, filename: &'a str) -> &'a str {
    match filename.strip_prefix(rel) {
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
        None => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_well_known() {
        assert!(is_well_known("google/protobuf/any.proto"));
        assert!(!is_well_known("google/api/annotations.proto"));
    }

    #[test]
    fn test_join_import_path() {
        assert_eq!(join_import_path("a/b", "c.proto"), "a/b/c.proto");
        assert_eq!(join_import_path("a/b/", "c.proto"), "a/b/c.proto");
        assert_eq!(join_import_path("", "c.proto"), "c.proto");
        assert_eq!(join_import_path(".", "c.proto"), "c.proto");
        assert_eq!(join_import_path("./a", "c.proto"), "a/c.proto");
    }

    #[test]
    fn test_strip_rel() {
        assert_eq!(strip_rel("a/b", "a/b/c.proto"), "c.proto");
        assert_eq!(strip_rel("x", "a/b/c.proto"), "a/b/c.proto");
        assert_eq!(strip_rel("", "c.proto"), "c.proto");
    }

    #[test]
    fn test_import_spec_display() {
        let spec = ImportSpec::new(ResolveKind::ProtoGoLibrary, "x/y.proto");
        assert_eq!(spec.to_string(), "proto_go_library x/y.proto");
    }
}
