//! Command implementations

use std::path::PathBuf;

use anyhow::Result;

use coil::util::config::{load_config, Config};
use coil::util::context::project_root;
use coil::GlobalContext;

pub mod build;
pub mod clean;
pub mod completions;
pub mod configure;
pub mod generate;
pub mod init;
pub mod list;

/// Locate the manifest and load the merged configuration for its project.
pub fn locate(manifest_path: Option<PathBuf>) -> Result<(PathBuf, Config)> {
    let ctx = GlobalContext::new()?.with_manifest_path(manifest_path);
    let manifest_path = ctx.find_manifest()?;

    let root = project_root(&manifest_path);
    let global = ctx.config_path();
    let config = load_config(global.as_deref(), &ctx.project_config_path(&root));

    Ok((manifest_path, config))
}
