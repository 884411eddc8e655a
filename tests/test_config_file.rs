//! Loading resolve overrides from a YAML config file.

use std::io::Write;

use protodeps::{Config, ConfigError, Label, ResolveKind};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"repo_name: build_stack_rules_proto
resolves:
  - kind: proto_compiled_sources
    import: google/api/annotations.proto
    label: "@googleapis//google/api:annotations_proto"
  - kind: proto_go_library
    import: google/api/annotations.proto
    label: "@go_googleapis//google/api:annotations_go_proto""#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.repo_name.as_str(), "build_stack_rules_proto");
    assert_eq!(config.overrides.len(), 2);
    assert_eq!(
        config
            .overrides
            .lookup(ResolveKind::ProtoGoLibrary, "google/api/annotations.proto"),
        Some(&Label::new("go_googleapis", "google/api", "annotations_go_proto"))
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
