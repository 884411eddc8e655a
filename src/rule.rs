//! In-memory model of a generated build rule.
//!
//! Only what resolution needs: the rule kind, its name, string-list
//! attributes, and private state that is never written to build files.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{Label, ResolveKind};
use crate::resolve::UnresolvedDeps;

/// Per-rule state that is carried through a pass but never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrivateAttrs {
    /// Resolve imports as if the rule were of this kind.
    pub imp_lang: Option<ResolveKind>,
    /// Imports that could not be resolved on the last pass.
    pub unresolved: Option<UnresolvedDeps>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    kind: ResolveKind,
    name: SmolStr,
    attrs: IndexMap<SmolStr, Vec<String>>,
    pub private: PrivateAttrs,
}

impl Rule {
    pub fn new(kind: ResolveKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            name: name.into(),
            attrs: IndexMap::new(),
            private: PrivateAttrs::default(),
        }
    }

    pub fn kind(&self) -> ResolveKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The label of this rule when declared in `repo`/`pkg`.
    pub fn label(&self, repo: &str, pkg: &str) -> Label {
        Label::new(repo, pkg, &self.name)
    }

    /// The kind used for import resolution: the private override if set,
    /// otherwise the rule's own kind.
    pub fn resolve_kind(&self) -> ResolveKind {
        self.private.imp_lang.unwrap_or(self.kind)
    }

    /// String values of an attribute; empty if unset.
    pub fn attr_strings(&self, name: &str) -> &[String] {
        self.attrs.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_attr(&mut self, name: &str, values: Vec<String>) {
        self.attrs.insert(SmolStr::new(name), values);
    }

    pub fn del_attr(&mut self, name: &str) -> Option<Vec<String>> {
        self.attrs.shift_remove(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Attribute names in declaration order.
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(SmolStr::as_str)
    }
}
