//! Resolution kinds partition the import index by consuming rule kind.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A rule kind string that is not one of the known [`ResolveKind`]s.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown resolve kind: {0:?}")]
pub struct UnknownKind(pub String);

/// The rule kinds that take part in import resolution.
///
/// The same import string used by two different kinds resolves
/// independently, so this is part of every index and override key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveKind {
    ProtoLibrary,
    ProtoCompile,
    ProtoCompiledSources,
    ProtoCcLibrary,
    ProtoGoLibrary,
    ProtoJavaLibrary,
    ProtoPyLibrary,
    ProtoTsLibrary,
    ProtoClosureJsLibrary,
}

impl ResolveKind {
    pub const ALL: [ResolveKind; 9] = [
        ResolveKind::ProtoLibrary,
        ResolveKind::ProtoCompile,
        ResolveKind::ProtoCompiledSources,
        ResolveKind::ProtoCcLibrary,
        ResolveKind::ProtoGoLibrary,
        ResolveKind::ProtoJavaLibrary,
        ResolveKind::ProtoPyLibrary,
        ResolveKind::ProtoTsLibrary,
        ResolveKind::ProtoClosureJsLibrary,
    ];

    /// The rule kind name as written in build files.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResolveKind::ProtoLibrary => "proto_library",
            ResolveKind::ProtoCompile => "proto_compile",
            ResolveKind::ProtoCompiledSources => "proto_compiled_sources",
            ResolveKind::ProtoCcLibrary => "proto_cc_library",
            ResolveKind::ProtoGoLibrary => "proto_go_library",
            ResolveKind::ProtoJavaLibrary => "proto_java_library",
            ResolveKind::ProtoPyLibrary => "proto_py_library",
            ResolveKind::ProtoTsLibrary => "proto_ts_library",
            ResolveKind::ProtoClosureJsLibrary => "proto_closure_js_library",
        }
    }
}

impl fmt::Display for ResolveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolveKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
