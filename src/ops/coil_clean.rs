//! Implementation of `coil clean`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::Manifest;
use crate::ops::coil_configure::{build_dir, find_profile};
use crate::util::config::Config;
use crate::util::context::project_root;

/// Options for removing build directories.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Profile to reset
    pub profile: Option<String>,

    /// Reset every profile
    pub all: bool,

    /// Only report what would be removed
    pub dry_run: bool,
}

/// Remove profile build directories. Returns the directories that existed.
pub fn clean(manifest_path: &Path, config: &Config, opts: &CleanOptions) -> Result<Vec<PathBuf>> {
    let manifest = Manifest::load(manifest_path)?;
    let root = project_root(manifest_path);

    let dirs: Vec<PathBuf> = if opts.all {
        manifest
            .profiles
            .iter()
            .map(|p| build_dir(&root, config, p))
            .collect()
    } else {
        match &opts.profile {
            Some(name) => vec![build_dir(&root, config, find_profile(&manifest, name)?)],
            None => bail!("specify a profile with `-p <PROFILE>` or use `--all`"),
        }
    };

    let mut removed = Vec::new();
    for dir in dirs.into_iter().filter(|d| d.exists()) {
        if !opts.dry_run {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("failed to remove {}", dir.display()))?;
            tracing::debug!("removed {}", dir.display());
        }
        removed.push(dir);
    }

    Ok(removed)
}
