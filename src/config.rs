//! Resolution configuration: default repository name and overrides.
//!
//! Overrides come from two places: a YAML file loaded once at startup, and
//! `resolve` directives found in build files. Both feed the same
//! [`OverrideTable`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{ImportSpec, Label, LabelError, ResolveKind, UnknownKind};
use crate::resolve::OverrideTable;

/// Language name that `resolve` directives must carry to apply here.
pub const RESOLVER_LANG_NAME: &str = "protobuf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid label {label:?} for import {imp:?}: {source}")]
    Label {
        label: String,
        imp: String,
        #[source]
        source: LabelError,
    },
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),
    #[error("invalid resolve directive {0:?}: expected '<lang> <kind> <import> <label>'")]
    Directive(String),
}

/// Ambient configuration for a resolution pass.
///
/// Read-only while rules are being resolved.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Name of the repository being generated; labels with an empty
    /// repository are canonicalized to this.
    pub repo_name: SmolStr,
    /// Operator-supplied mappings that take precedence over the index.
    pub overrides: OverrideTable,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    repo_name: SmolStr,
    #[serde(default)]
    resolves: Vec<ResolveEntry>,
}

#[derive(Debug, Deserialize)]
struct ResolveEntry {
    kind: ResolveKind,
    import: String,
    label: String,
}

impl Config {
    /// Create a config with no overrides.
    pub fn new(repo_name: impl Into<SmolStr>) -> Self {
        Self {
            repo_name: repo_name.into(),
            overrides: OverrideTable::new(),
        }
    }

    /// Parse a YAML config document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_yaml::from_str(s)?;
        let mut config = Self::new(file.repo_name);
        for entry in file.resolves {
            let label = parse_override_label(&entry.label, &entry.import)?;
            config
                .overrides
                .insert(ImportSpec::new(entry.kind, entry.import), label);
        }
        Ok(config)
    }

    /// Load a YAML config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(
            "loaded {} resolve override(s) from {}",
            config.overrides.len(),
            path.display()
        );
        Ok(config)
    }

    /// Apply a build-file directive.
    ///
    /// Only `resolve` directives for [`RESOLVER_LANG_NAME`] are understood;
    /// anything else is ignored.
    pub fn apply_directive(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if key != "resolve" {
            return Ok(());
        }
        let fields: Vec<&str> = value.split_whitespace().collect();
        let [lang, kind, imp, label] = fields.as_slice() else {
            return Err(ConfigError::Directive(value.to_string()));
        };
        if *lang != RESOLVER_LANG_NAME {
            return Ok(());
        }
        let kind: ResolveKind = kind.parse()?;
        let label = parse_override_label(label, imp)?;
        self.overrides.insert(ImportSpec::new(kind, *imp), label);
        Ok(())
    }
}

fn parse_override_label(label: &str, imp: &str) -> Result<Label, ConfigError> {
    Label::parse(label).map_err(|source| ConfigError::Label {
        label: label.to_string(),
        imp: imp.to_string(),
        source,
    })
}
