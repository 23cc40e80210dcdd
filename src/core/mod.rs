//! Core data structures for Coil.
//!
//! This module contains the manifest model consumed by the generator:
//! - Project identity and the manifest itself
//! - Dependencies and their imported library aliases
//! - Targets, target features and global features
//! - Scripts and build profiles

pub mod dependency;
pub mod feature;
pub mod manifest;
pub mod profile;
pub mod script;
pub mod target;

pub use dependency::{Dependency, Import, SourceKind};
pub use feature::Feature;
pub use manifest::{Manifest, ProjectMetadata};
pub use profile::Profile;
pub use script::Script;
pub use target::{Target, TargetFeature, TargetKind, TargetLibrary, Visibility};

/// Manifest file name.
pub const MANIFEST_NAME: &str = "Coil.toml";
