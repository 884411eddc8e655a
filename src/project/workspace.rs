use rayon::prelude::*;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::base::Label;
use crate::config::Config;
use crate::resolve::{
    DepsResolver, Diagnostic, DiagnosticCollector, ImportIndex, ProtoLibrary, RuleIndex,
    proto_files_import_specs_for_kind,
};
use crate::rule::Rule;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("rule {0} is already part of the workspace")]
    DuplicateRule(Label),
}

/// A rule produced by the generation phase, with the library it was
/// generated from and the imports its sources declare.
#[derive(Clone, Debug)]
pub struct GeneratedRule {
    pub label: Label,
    pub rule: Rule,
    pub library: ProtoLibrary,
    pub imports: Vec<String>,
}

impl GeneratedRule {
    pub fn new(label: Label, rule: Rule, library: ProtoLibrary, imports: Vec<String>) -> Self {
        Self {
            label,
            rule,
            library,
            imports,
        }
    }
}

/// All generated rules of one pass.
#[derive(Debug, Default)]
pub struct Workspace {
    rules: Vec<GeneratedRule>,
    labels: FxHashSet<Label>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a generated rule. Labels must be unique.
    pub fn add_rule(&mut self, rule: GeneratedRule) -> Result<(), WorkspaceError> {
        if !self.labels.insert(rule.label.clone()) {
            return Err(WorkspaceError::DuplicateRule(rule.label));
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rules(&self) -> &[GeneratedRule] {
        &self.rules
    }

    pub fn rule(&self, label: &Label) -> Option<&GeneratedRule> {
        self.rules.iter().find(|r| &r.label == label)
    }

    /// Build and seal the reverse index: every rule provides the files of
    /// its library under its effective resolve kind.
    pub fn build_index(&self) -> RuleIndex {
        let mut index = RuleIndex::new();
        for generated in &self.rules {
            let specs = proto_files_import_specs_for_kind(
                generated.rule.resolve_kind(),
                &generated.library.files,
            );
            index.add_rule(generated.label.clone(), specs);
        }
        index.finish();
        index
    }

    /// Resolve the dependency attribute of every rule.
    ///
    /// Rules are independent, so they are resolved in parallel; `config`
    /// and `index` are only read. Returns the diagnostics of all rules,
    /// sorted by rule label and import.
    pub fn resolve_deps(
        &mut self,
        config: &Config,
        index: &dyn ImportIndex,
        resolver: &DepsResolver,
    ) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = self
            .rules
            .par_iter_mut()
            .flat_map_iter(|generated| {
                resolver.resolve_rule(
                    config,
                    index,
                    &mut generated.rule,
                    &generated.imports,
                    &generated.label,
                );
                let mut collector = DiagnosticCollector::new();
                if let Some(unresolved) = &generated.rule.private.unresolved {
                    collector.unresolved(&generated.label, unresolved);
                }
                collector.take()
            })
            .collect();

        diagnostics.sort_by(|a, b| a.rule.cmp(&b.rule).then_with(|| a.import.cmp(&b.import)));

        let mut collector = DiagnosticCollector::new();
        for diagnostic in diagnostics {
            collector.add(diagnostic);
        }
        tracing::info!(
            "resolved {} rule(s) into '{}': {} error(s), {} warning(s)",
            self.rules.len(),
            resolver.attr_name(),
            collector.error_count(),
            collector.warning_count()
        );
        collector.take()
    }
}
