//! External dependency declarations.
//!
//! A Dependency names a package, where it is fetched from, and the library
//! aliases (imports) that targets use to refer to it.

use std::fmt;

use serde::Deserialize;

/// Where a dependency is fetched from.
///
/// Unknown provider strings are kept as [`SourceKind::Unsupported`] so that
/// the generator can reject them with the offending value, rather than the
/// manifest loader failing on the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum SourceKind {
    /// Fetched directly from the package registry
    Registry,
    /// Installed in bulk by the native package manager
    Native,
    /// Downloaded from an archive URL
    Url,
    /// Cloned from a version control repository
    Git,
    /// Provided by the system (assumed installed)
    System,
    /// Anything else; rejected during generation
    Unsupported(String),
}

impl From<String> for SourceKind {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "registry" | "pkg" => SourceKind::Registry,
            "native" | "conan" => SourceKind::Native,
            "url" => SourceKind::Url,
            "git" => SourceKind::Git,
            "system" => SourceKind::System,
            _ => SourceKind::Unsupported(s),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Registry => write!(f, "registry"),
            SourceKind::Native => write!(f, "native"),
            SourceKind::Url => write!(f, "url"),
            SourceKind::Git => write!(f, "git"),
            SourceKind::System => write!(f, "system"),
            SourceKind::Unsupported(s) => write!(f, "{}", s),
        }
    }
}

/// A library alias exported by a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Import {
    /// Alias referenced by target libraries (e.g. `ZLIB::ZLIB`)
    #[serde(rename = "target")]
    pub name: String,

    /// Argument string for `find_package` (e.g. `ZLIB REQUIRED`)
    pub find: String,
}

impl Import {
    pub fn new(name: impl Into<String>, find: impl Into<String>) -> Self {
        Import {
            name: name.into(),
            find: find.into(),
        }
    }
}

/// An external dependency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dependency {
    /// Provider the package is fetched from
    pub from: SourceKind,

    /// Package identifier, `NAME/VERSION` for url and git sources
    pub package: String,

    /// URL or path of the resource
    #[serde(default)]
    pub path: String,

    /// Library aliases provided by this package
    #[serde(default)]
    pub imports: Vec<Import>,
}

impl Dependency {
    /// Create a dependency without imports.
    pub fn new(from: SourceKind, package: impl Into<String>) -> Self {
        Dependency {
            from,
            package: package.into(),
            path: String::new(),
            imports: Vec::new(),
        }
    }

    /// Set the fetch path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Add an import.
    pub fn with_import(mut self, name: impl Into<String>, find: impl Into<String>) -> Self {
        self.imports.push(Import::new(name, find));
        self
    }

    /// The package name, i.e. everything before the first `/`.
    pub fn name(&self) -> &str {
        self.package
            .split_once('/')
            .map_or(self.package.as_str(), |(name, _)| name)
    }

    /// Split the package into its name and version/tag components.
    pub fn name_and_version(&self) -> Option<(&str, &str)> {
        self.package.split_once('/')
    }
}
