//! Manifest fixtures for common test scenarios.

use crate::core::{
    Dependency, Feature, Manifest, ProjectMetadata, Script, Target, TargetFeature, TargetKind,
    TargetLibrary,
};

/// Builder for an in-memory manifest.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    manifest: Manifest,
}

/// Start a manifest for project `demo` version `1.0.0`.
pub fn manifest() -> ManifestBuilder {
    ManifestBuilder {
        manifest: Manifest {
            project: ProjectMetadata {
                name: "demo".to_string(),
                version: "1.0.0".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

impl ManifestBuilder {
    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.manifest.dependencies.push(dependency);
        self
    }

    pub fn feature(mut self, feature: Feature) -> Self {
        self.manifest.features.push(feature);
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.manifest.targets.push(target);
        self
    }

    pub fn script(mut self, script: Script) -> Self {
        self.manifest.scripts.push(script);
        self
    }

    pub fn build(self) -> Manifest {
        self.manifest
    }
}

/// An executable linking `aliases` in a single unconditional feature.
pub fn linked_target(name: &str, requirement: &str, aliases: &[&str]) -> Target {
    Target::new(name, TargetKind::Executable, requirement).with_feature(TargetFeature {
        libraries: vec![TargetLibrary {
            visibility: None,
            targets: aliases.iter().map(|a| a.to_string()).collect(),
        }],
        ..Default::default()
    })
}

/// A cached global option.
pub fn option(key: &str, value: &str) -> Feature {
    Feature {
        key: Some(key.to_string()),
        value: Some(value.to_string()),
        description: Some(format!("{} option", key)),
        ..Default::default()
    }
}
