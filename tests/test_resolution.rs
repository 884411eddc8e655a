//! End-to-end resolution of rule dependencies against a reverse index.

use protodeps::resolve::{ProtoFile, ProtoLibrary, proto_library_import_specs_for_kind};
use protodeps::{
    Config, DepsResolver, ImportSpec, Label, ResolveError, ResolveKind, Rule, RuleIndex,
};
use rstest::{fixture, rstest};

const KIND: ResolveKind = ResolveKind::ProtoCompiledSources;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[fixture]
fn config() -> Config {
    Config::new("repo")
}

#[fixture]
fn index() -> RuleIndex {
    let mut index = RuleIndex::new();
    index.add_rule(Label::new("repo", "x", "y"), [ImportSpec::new(KIND, "x/y.proto")]);
    index.add_rule(Label::new("repo", "a/b", "R"), [ImportSpec::new(KIND, "a/b/self.proto")]);
    index.add_rule(Label::new("repo", "q", "r1"), [ImportSpec::new(KIND, "q/r.proto")]);
    index.add_rule(Label::new("repo", "q", "r2"), [ImportSpec::new(KIND, "q/r.proto")]);
    index.finish();
    index
}

fn from() -> Label {
    Label::new("", "a/b", "R")
}

#[rstest]
#[case::self_import_elided(&["x/y.proto", "a/b/self.proto"], &["@repo//x:y"], &[])]
#[case::missing_import(&["z/w.proto"], &[], &["z/w.proto"])]
#[case::ambiguous_import(&["q/r.proto"], &[], &["q/r.proto"])]
#[case::mixed(&["q/r.proto", "z/w.proto", "x/y.proto", "a/b/self.proto"], &["@repo//x:y"], &["q/r.proto", "z/w.proto"])]
fn test_resolve_deps_attr(
    config: Config,
    index: RuleIndex,
    #[case] imports: &[&str],
    #[case] expected_deps: &[&str],
    #[case] expected_unresolved: &[&str],
) {
    let mut rule = Rule::new(KIND, "R");
    DepsResolver::new("deps", false).resolve_rule(
        &config,
        &index,
        &mut rule,
        &strings(imports),
        &from(),
    );

    assert_eq!(rule.attr_strings("deps"), strings(expected_deps).as_slice());

    let unresolved: Vec<&str> = rule
        .private
        .unresolved
        .as_ref()
        .map(|u| u.iter().map(|(imp, _)| imp).collect())
        .unwrap_or_default();
    assert_eq!(unresolved, expected_unresolved);
}

#[rstest]
fn test_missing_import_reason_is_no_label(config: Config, index: RuleIndex) {
    let resolution = DepsResolver::new("deps", false).resolve_imports(
        &config,
        &index,
        &[],
        KIND,
        &strings(&["z/w.proto"]),
        &from(),
    );
    assert_eq!(resolution.unresolved.get("z/w.proto"), Some(&ResolveError::NoLabel));
    assert_eq!(resolution.unresolved.get("z/w.proto").unwrap().to_string(), "no label");
}

#[rstest]
fn test_ambiguous_reason_names_both_targets(config: Config, index: RuleIndex) {
    let resolution = DepsResolver::new("deps", false).resolve_imports(
        &config,
        &index,
        &[],
        KIND,
        &strings(&["q/r.proto"]),
        &from(),
    );
    let reason = resolution.unresolved.get("q/r.proto").unwrap().to_string();
    assert!(reason.contains("@repo//q:r1"), "{reason}");
    assert!(reason.contains("@repo//q:r2"), "{reason}");
    assert!(reason.contains("//a/b:R"), "{reason}");
    assert!(resolution.deps.is_empty());
}

#[rstest]
fn test_output_is_sorted_and_unique(config: Config, index: RuleIndex) {
    let resolution = DepsResolver::new("deps", false).resolve_imports(
        &config,
        &index,
        &strings(&["//b:b", "//a:a", "@repo//x:y"]),
        KIND,
        &strings(&["x/y.proto", "x/y.proto"]),
        &from(),
    );
    assert_eq!(resolution.deps, strings(&["//a:a", "//b:b", "@repo//x:y"]));
}

#[rstest]
fn test_override_directive_takes_precedence(mut config: Config, index: RuleIndex) {
    config
        .apply_directive("resolve", "protobuf proto_compiled_sources q/r.proto @other//q:fixed")
        .unwrap();
    let resolution = DepsResolver::new("deps", false).resolve_imports(
        &config,
        &index,
        &[],
        KIND,
        &strings(&["q/r.proto"]),
        &from(),
    );
    assert_eq!(resolution.deps, strings(&["@other//q:fixed"]));
    assert!(resolution.unresolved.is_empty());
}

#[rstest]
fn test_index_built_from_projected_specs(config: Config) {
    let libs = [ProtoLibrary::new(
        Label::new("", "x", "y_proto"),
        vec![ProtoFile::from_path("x/y.proto"), ProtoFile::from_path("x/z.proto")],
    )];
    let mut index = RuleIndex::new();
    index.add_rule(Label::new("", "x", "y_srcs"), proto_library_import_specs_for_kind(KIND, &libs));
    index.finish();

    let resolution = DepsResolver::new("deps", false).resolve_imports(
        &config,
        &index,
        &[],
        KIND,
        &strings(&["x/z.proto"]),
        &Label::new("", "x", "other"),
    );
    assert_eq!(resolution.deps, strings(&[":y_srcs"]));
}
