//! Operator-supplied import mappings.

use rustc_hash::FxHashMap;

use crate::base::{ImportSpec, Label, ResolveKind};

/// Fixed `(kind, import) → label` mappings.
///
/// An override is authoritative: it short-circuits the index and is not
/// subject to ambiguity or self-import checks.
#[derive(Clone, Debug, Default)]
pub struct OverrideTable {
    entries: FxHashMap<ImportSpec, Label>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override. A later entry for the same key replaces the
    /// earlier one.
    pub fn insert(&mut self, spec: ImportSpec, label: Label) -> Option<Label> {
        self.entries.insert(spec, label)
    }

    /// Look up the override for an import, if any.
    pub fn lookup(&self, kind: ResolveKind, imp: &str) -> Option<&Label> {
        self.entries.get(&ImportSpec::new(kind, imp))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_keyed_by_kind() {
        let mut table = OverrideTable::new();
        table.insert(
            ImportSpec::new(ResolveKind::ProtoGoLibrary, "a/b.proto"),
            Label::new("go", "a", "b_go"),
        );

        assert!(table.lookup(ResolveKind::ProtoGoLibrary, "a/b.proto").is_some());
        assert!(table.lookup(ResolveKind::ProtoPyLibrary, "a/b.proto").is_none());
        assert!(table.lookup(ResolveKind::ProtoGoLibrary, "a/c.proto").is_none());
    }

    #[test]
    fn test_later_insert_wins() {
        let mut table = OverrideTable::new();
        let spec = ImportSpec::new(ResolveKind::ProtoLibrary, "a.proto");
        table.insert(spec.clone(), Label::new("", "a", "one"));
        let previous = table.insert(spec, Label::new("", "a", "two"));

        assert_eq!(previous, Some(Label::new("", "a", "one")));
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.lookup(ResolveKind::ProtoLibrary, "a.proto"),
            Some(&Label::new("", "a", "two"))
        );
    }
}
