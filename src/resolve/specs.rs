//! Import-spec projection for proto libraries.
//!
//! The import string of a file is `dir/basename`, exactly as other files
//! write it in their `import` statements. The index must be filled with
//! the same shape or lookups come back empty.

use crate::base::{ImportSpec, Label, ResolveKind, join_import_path};

/// A source file, split into its workspace-relative directory and name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtoFile {
    pub dir: String,
    pub basename: String,
}

impl ProtoFile {
    pub fn new(dir: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            basename: basename.into(),
        }
    }

    /// Split a workspace-relative path at its last `/`.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once('/') {
            Some((dir, basename)) => Self::new(dir, basename),
            None => Self::new("", path),
        }
    }

    /// The string other files use to import this one.
    pub fn import_path(&self) -> String {
        join_import_path(&self.dir, &self.basename)
    }
}

/// A `proto_library`: its label and the files it declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtoLibrary {
    pub label: Label,
    pub files: Vec<ProtoFile>,
}

impl ProtoLibrary {
    pub fn new(label: Label, files: Vec<ProtoFile>) -> Self {
        Self { label, files }
    }
}

/// One import spec of `kind` per file.
pub fn proto_files_import_specs_for_kind(
    kind: ResolveKind,
    files: &[ProtoFile],
) -> Vec<ImportSpec> {
    files
        .iter()
        .map(|file| ImportSpec::new(kind, file.import_path()))
        .collect()
}

/// One import spec of `kind` per file of every library.
pub fn proto_library_import_specs_for_kind(
    kind: ResolveKind,
    libs: &[ProtoLibrary],
) -> Vec<ImportSpec> {
    libs.iter()
        .flat_map(|lib| proto_files_import_specs_for_kind(kind, &lib.files))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_specs() {
        let files = vec![ProtoFile::new("x", "y.proto"), ProtoFile::new("", "top.proto")];
        let specs = proto_files_import_specs_for_kind(ResolveKind::ProtoPyLibrary, &files);

        assert_eq!(
            specs,
            vec![
                ImportSpec::new(ResolveKind::ProtoPyLibrary, "x/y.proto"),
                ImportSpec::new(ResolveKind::ProtoPyLibrary, "top.proto"),
            ]
        );
    }

    #[test]
    fn test_library_specs_preserve_order() {
        let libs = vec![
            ProtoLibrary::new(
                Label::new("", "a", "a_proto"),
                vec![ProtoFile::from_path("a/one.proto"), ProtoFile::from_path("a/two.proto")],
            ),
            ProtoLibrary::new(
                Label::new("", "b", "b_proto"),
                vec![ProtoFile::from_path("b/three.proto")],
            ),
        ];
        let imports: Vec<_> = proto_library_import_specs_for_kind(ResolveKind::ProtoLibrary, &libs)
            .into_iter()
            .map(|spec| spec.imp.to_string())
            .collect();

        assert_eq!(imports, vec!["a/one.proto", "a/two.proto", "b/three.proto"]);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(ProtoFile::from_path("a/b/c.proto"), ProtoFile::new("a/b", "c.proto"));
        assert_eq!(ProtoFile::from_path("c.proto"), ProtoFile::new("", "c.proto"));
    }

    #[test]
    fn test_no_files_no_specs() {
        assert!(proto_library_import_specs_for_kind(ResolveKind::ProtoLibrary, &[]).is_empty());
    }
}
