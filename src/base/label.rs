//! Target references ("labels") for buildable units.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use thiserror::Error;

/// Errors produced while parsing a label string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("empty label")]
    Empty,
    #[error("label {0:?} has an empty target name")]
    EmptyName(String),
    #[error("label {0:?} names a repository but has no '//' package marker")]
    MissingPackage(String),
    #[error("label {0:?} has more than one ':' separator")]
    MultipleColons(String),
}

/// A fully qualified (or package-relative) reference to a build target.
///
/// A label is made of three parts: repository, package path and target
/// name. `relative` labels carry only a name and are written `:name`.
#[derive(Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Label {
    pub repo: SmolStr,
    pub pkg: SmolStr,
    pub name: SmolStr,
    pub relative: bool,
}

impl Label {
    /// The "unresolved" sentinel.
    pub const NO_LABEL: Label = Label {
        repo: SmolStr::new_inline(""),
        pkg: SmolStr::new_inline(""),
        name: SmolStr::new_inline(""),
        relative: false,
    };

    /// Create an absolute label.
    pub fn new(repo: &str, pkg: &str, name: &str) -> Self {
        Self {
            repo: SmolStr::new(repo),
            pkg: SmolStr::new(pkg),
            name: SmolStr::new(name),
            relative: false,
        }
    }

    /// Check for the [`Label::NO_LABEL`] sentinel.
    pub fn is_no_label(&self) -> bool {
        *self == Self::NO_LABEL
    }

    /// Parse a label string.
    pub fn parse(s: &str) -> Result<Self, LabelError> {
        if s.is_empty() {
            return Err(LabelError::Empty);
        }

        let (repo, rest) = if let Some(stripped) = s.strip_prefix('@') {
            let stripped = stripped.strip_prefix('@').unwrap_or(stripped);
            match stripped.find("//") {
                Some(idx) => (&stripped[..idx], &stripped[idx..]),
                None => return Err(LabelError::MissingPackage(s.to_string())),
            }
        } else {
            ("", s)
        };

        if let Some(pkg_and_name) = rest.strip_prefix("//") {
            let (pkg, name) = match pkg_and_name.split_once(':') {
                Some((pkg, name)) => (pkg, name),
                None => {
                    let name = pkg_and_name.rsplit('/').next().unwrap_or(pkg_and_name);
                    (pkg_and_name, name)
                }
            };
            if name.contains(':') {
                return Err(LabelError::MultipleColons(s.to_string()));
            }
            if name.is_empty() {
                // `//:name` is fine, but `//` and `//pkg:` are not.
                return Err(LabelError::EmptyName(s.to_string()));
            }
            return Ok(Self::new(repo, pkg.trim_end_matches('/'), name));
        }

        let name = rest.strip_prefix(':').unwrap_or(rest);
        if name.contains(':') {
            return Err(LabelError::MultipleColons(s.to_string()));
        }
        if name.is_empty() {
            return Err(LabelError::EmptyName(s.to_string()));
        }
        Ok(Self {
            name: SmolStr::new(name),
            relative: true,
            ..Self::default()
        })
    }

    /// Rewrite this label in its shortest form as seen from `repo`/`pkg`.
    ///
    /// Labels in another repository (and labels that are already relative)
    /// are returned unchanged.
    pub fn rel(&self, repo: &str, pkg: &str) -> Self {
        if self.relative || self.repo != repo {
            return self.clone();
        }
        if self.pkg == pkg {
            return Self {
                name: self.name.clone(),
                relative: true,
                ..Self::default()
            };
        }
        Self {
            repo: SmolStr::default(),
            pkg: self.pkg.clone(),
            name: self.name.clone(),
            relative: false,
        }
    }

    /// Fill in an empty repository with `default_repo`.
    pub fn canonical(&self, default_repo: &str) -> Self {
        if self.relative || !self.repo.is_empty() {
            return self.clone();
        }
        Self {
            repo: SmolStr::new(default_repo),
            ..self.clone()
        }
    }

    /// Resolve a relative label against the package of `from`.
    pub fn abs(&self, from: &Label) -> Self {
        if !self.relative {
            return self.clone();
        }
        Self::new(&from.repo, &from.pkg, &self.name)
    }

    /// Check whether two labels name the same target once both are
    /// canonicalized against `default_repo`.
    pub fn same_target(&self, other: &Label, default_repo: &str) -> bool {
        self == other || self.canonical(default_repo) == other.canonical(default_repo)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({})", self)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            return write!(f, ":{}", self.name);
        }
        if !self.repo.is_empty() {
            write!(f, "@{}", self.repo)?;
        }
        let base = self.pkg.rsplit('/').next().unwrap_or("");
        if self.name == base {
            write!(f, "//{}", self.pkg)
        } else {
            write!(f, "//{}:{}", self.pkg, self.name)
        }
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
