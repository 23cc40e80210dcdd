//! Build profiles.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A named build configuration passed to the configure step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    /// Profile name
    #[serde(alias = "id")]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Build type (e.g. Debug or Release)
    #[serde(default, rename = "type")]
    pub build_type: String,

    /// Operating system (e.g. Windows, Linux, macOS)
    #[serde(default)]
    pub system: String,

    /// C++ compiler
    #[serde(default)]
    pub compiler: String,

    #[serde(default)]
    pub arch: String,

    /// Variables forwarded as `-DKEY=VALUE` definitions
    #[serde(default, alias = "options")]
    pub variables: Vec<BTreeMap<String, String>>,

    #[serde(default)]
    pub link_flags: Vec<String>,

    #[serde(default)]
    pub compile_flags: Vec<String>,
}
