//! Global context for Coil operations.
//!
//! Provides centralized access to the working directory, the located
//! manifest and the configuration file paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::MANIFEST_NAME;
use crate::util::config::{global_config_path, project_config_path};

/// Error locating the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(
        "could not find {} in {} or any parent directory\nhelp: Run `coil init` to create a new project",
        MANIFEST_NAME,
        .dir.display()
    )]
    NotFound { dir: PathBuf },
}

/// Global context containing paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Explicit manifest path from the command line
    manifest_path: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a new GlobalContext rooted at the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        Ok(GlobalContext {
            cwd,
            manifest_path: None,
        })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext {
            cwd,
            manifest_path: None,
        }
    }

    /// Use an explicit manifest instead of searching for one.
    pub fn with_manifest_path(mut self, path: Option<PathBuf>) -> Self {
        self.manifest_path = path.map(|p| self.cwd.join(p));
        self
    }

    /// Find the manifest, starting from cwd and searching upward.
    pub fn find_manifest(&self) -> Result<PathBuf, ManifestError> {
        if let Some(path) = &self.manifest_path {
            return Ok(path.clone());
        }

        let mut current = self.cwd.clone();
        loop {
            let candidate = current.join(MANIFEST_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }

            if !current.pop() {
                return Err(ManifestError::NotFound {
                    dir: self.cwd.clone(),
                });
            }
        }
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> Option<PathBuf> {
        global_config_path()
    }

    /// Get the project configuration file path for a project root.
    pub fn project_config_path(&self, root: &Path) -> PathBuf {
        project_config_path(root)
    }
}

/// Project root for a manifest path.
pub fn project_root(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
