//! Configuration file support for Coil.
//!
//! Coil supports two configuration file locations:
//! - Global: `~/.coil/config.toml` - User-wide defaults
//! - Project: `.coil/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::generator::{FetchGate, GenerateOptions};

/// Default name of the generated script.
pub const DEFAULT_OUTPUT: &str = "CMakeLists.txt";

/// Default CMake generator used by `coil configure`.
pub const DEFAULT_CMAKE_GENERATOR: &str = "Ninja";

/// Coil configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Script generation settings
    pub generate: GenerateConfig,

    /// Configure step settings
    pub configure: ConfigureConfig,
}

/// Generation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GenerateConfig {
    /// How dependency fetches are gated (all, any)
    pub fetch_gate: Option<FetchGate>,

    /// Minimum CMake version
    pub cmake_minimum: Option<String>,

    /// Project languages
    pub languages: Option<Vec<String>>,

    /// Output file name, relative to the project root
    pub output: Option<String>,
}

/// Configure step settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfigureConfig {
    /// CMake generator (e.g. Ninja)
    pub generator: Option<String>,

    /// Build directory root; each profile gets a subdirectory
    pub build_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.generate.fetch_gate.is_some() {
            self.generate.fetch_gate = other.generate.fetch_gate;
        }
        if other.generate.cmake_minimum.is_some() {
            self.generate.cmake_minimum = other.generate.cmake_minimum;
        }
        if other.generate.languages.is_some() {
            self.generate.languages = other.generate.languages;
        }
        if other.generate.output.is_some() {
            self.generate.output = other.generate.output;
        }

        if other.configure.generator.is_some() {
            self.configure.generator = other.configure.generator;
        }
        if other.configure.build_dir.is_some() {
            self.configure.build_dir = other.configure.build_dir;
        }
    }

    /// Generator options with defaults filled in.
    pub fn generate_options(&self) -> GenerateOptions {
        let defaults = GenerateOptions::default();

        GenerateOptions {
            fetch_gate: self.generate.fetch_gate.unwrap_or(defaults.fetch_gate),
            cmake_minimum: self
                .generate
                .cmake_minimum
                .clone()
                .unwrap_or(defaults.cmake_minimum),
            languages: self
                .generate
                .languages
                .clone()
                .unwrap_or(defaults.languages),
            tool_version: defaults.tool_version,
        }
    }

    /// Output file name.
    pub fn output(&self) -> &str {
        self.generate.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    /// CMake generator name.
    pub fn cmake_generator(&self) -> &str {
        self.configure
            .generator
            .as_deref()
            .unwrap_or(DEFAULT_CMAKE_GENERATOR)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.coil/config.toml)
/// 2. Global config (~/.coil/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global coil config directory (~/.coil).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".coil"))
}

/// Get the global config path (~/.coil/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.coil/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".coil").join("config.toml")
}
