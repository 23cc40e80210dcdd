//! Coil.toml manifest schema and loading.
//!
//! The manifest is the complete declarative description of a project. It is
//! immutable input to the generator; all semantic checks (empty requirements,
//! malformed package identifiers, unknown providers) happen during generation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::dependency::Dependency;
use crate::core::feature::Feature;
use crate::core::profile::Profile;
use crate::core::script::Script;
use crate::core::target::Target;

/// Project identity from the [project] section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectMetadata {
    /// Project name
    pub name: String,

    /// Project version (e.g. 0.0.1)
    pub version: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub organization: String,

    /// Organization contact information
    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub license: String,

    /// Project website
    #[serde(default)]
    pub site: String,

    #[serde(default)]
    pub repository: String,
}

/// The parsed Coil.toml manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    /// Root-level features
    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(default)]
    pub profiles: Vec<Profile>,

    #[serde(default)]
    pub targets: Vec<Target>,

    #[serde(default)]
    pub scripts: Vec<Script>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Parse manifest content.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;

        tracing::debug!(
            "loaded `{}`: {} targets, {} dependencies, {} scripts",
            manifest.project.name,
            manifest.targets.len(),
            manifest.dependencies.len(),
            manifest.scripts.len()
        );

        Ok(manifest)
    }

    /// Get a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Get a profile by name.
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Global features that declare user-visible options.
    pub fn options(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_option())
    }
}

/// Generate a default Coil.toml for a new project.
pub fn generate_default_manifest(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
version = "0.1.0"
license = "MIT"

[[profiles]]
name = "debug"
type = "Debug"

[[targets]]
name = "{name}"
type = "executable"
requirement = "COIL_ALWAYS_BUILD"
path = "src/{name}"
"#
    )
}
