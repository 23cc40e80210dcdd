//! Build target types.
//!
//! A target is a single buildable unit. Its settings are expressed as an
//! ordered list of [`TargetFeature`]s, each optionally gated by a condition.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// The kind of target being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Console executable
    #[serde(alias = "exe")]
    Executable,

    /// Graphical application
    #[serde(alias = "app")]
    Application,

    /// Static library (.a / .lib)
    #[serde(alias = "static")]
    StaticLibrary,

    /// Shared library; static-vs-shared is chosen at configure time
    #[serde(alias = "shared")]
    SharedLibrary,

    /// Header-only library (interface sources only)
    #[serde(alias = "header-only", alias = "interface")]
    HeaderLibrary,

    /// Loadable module
    Plugin,

    /// Test executable
    Test,
}

impl Default for TargetKind {
    fn default() -> Self {
        TargetKind::Executable
    }
}

impl TargetKind {
    /// Manifest spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Executable => "executable",
            TargetKind::Application => "application",
            TargetKind::StaticLibrary => "static-library",
            TargetKind::SharedLibrary => "shared-library",
            TargetKind::HeaderLibrary => "header-library",
            TargetKind::Plugin => "plugin",
            TargetKind::Test => "test",
        }
    }

    /// Check if this is a header-only library.
    pub fn is_header_only(&self) -> bool {
        matches!(self, TargetKind::HeaderLibrary)
    }

    /// Default visibility for libraries linked into a target of this kind.
    pub fn default_visibility(&self) -> Visibility {
        match self {
            TargetKind::HeaderLibrary => Visibility::Interface,
            TargetKind::SharedLibrary => Visibility::Public,
            _ => Visibility::Private,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link visibility of a library reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[serde(alias = "PRIVATE")]
    Private,
    #[serde(alias = "PUBLIC")]
    Public,
    #[serde(alias = "INTERFACE")]
    Interface,
}

impl Visibility {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Visibility::Private => "PRIVATE",
            Visibility::Public => "PUBLIC",
            Visibility::Interface => "INTERFACE",
        }
    }
}

/// A group of libraries linked with the same visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TargetLibrary {
    /// Explicit visibility; falls back to the target default
    #[serde(default, rename = "type")]
    pub visibility: Option<Visibility>,

    /// Library aliases, e.g. `Qt6::Core` or `ZLIB::ZLIB`
    #[serde(default)]
    pub targets: Vec<String>,
}

/// A QML module registered on a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleDescriptor {
    pub uri: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
}

/// A test registered against the target binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TestDefinition {
    pub name: String,

    /// Function names passed as arguments to the binary
    #[serde(default)]
    pub functions: Vec<String>,
}

/// Files embedded into the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceGroup {
    /// File globs
    #[serde(default)]
    pub files: Vec<String>,

    /// Prefix prepended to the resource alias
    #[serde(default)]
    pub prefix: Option<String>,

    /// QML module name if this group describes one
    #[serde(default)]
    pub module: Option<String>,
}

/// An installation rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstallRule {
    /// Rule type (e.g. `FILES` or `DIRECTORY`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Arguments passed after the type
    #[serde(default)]
    pub rules: Vec<String>,
}

/// A conditionally applied bundle of target settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TargetFeature {
    #[serde(default, rename = "if")]
    pub condition: Option<String>,

    #[serde(default)]
    pub scripts: Vec<String>,

    #[serde(default, rename = "defines")]
    pub definitions: Vec<String>,

    #[serde(default)]
    pub libraries: Vec<TargetLibrary>,

    #[serde(default)]
    pub module: Option<ModuleDescriptor>,

    #[serde(default)]
    pub properties: Vec<BTreeMap<String, String>>,

    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default)]
    pub tests: Vec<TestDefinition>,

    #[serde(default)]
    pub resources: Vec<ResourceGroup>,

    #[serde(default)]
    pub installs: Vec<InstallRule>,
}

/// A build target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    /// Target name, also the name of the generated build target
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type", default)]
    pub kind: TargetKind,

    /// Export the library under the project namespace
    #[serde(default)]
    pub export: bool,

    /// Gate for the whole target. Use `COIL_ALWAYS_BUILD` for no requirement;
    /// an empty condition evaluates to false downstream and is rejected.
    #[serde(default)]
    pub requirement: String,

    /// Source directory, relative to the project root
    #[serde(default)]
    pub path: String,

    /// Applied in order
    #[serde(default)]
    pub features: Vec<TargetFeature>,
}

impl Target {
    /// Create a target with no features.
    pub fn new(name: impl Into<String>, kind: TargetKind, requirement: impl Into<String>) -> Self {
        Target {
            name: name.into(),
            description: String::new(),
            kind,
            export: false,
            requirement: requirement.into(),
            path: String::new(),
            features: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: TargetFeature) -> Self {
        self.features.push(feature);
        self
    }
}
