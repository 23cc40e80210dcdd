//! Implementation of `coil build`.

use std::path::Path;

use anyhow::{bail, Result};

use crate::ops::coil_configure::profile_build_dir;
use crate::util::config::Config;
use crate::util::process::{require_tool, tool_or_name, ProcessBuilder};

/// Options for building a configured profile.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub profile: String,

    /// Passed through to the native build tool after `--`
    pub args: Vec<String>,

    /// Print the command instead of running it
    pub dry_run: bool,
}

/// CMake arguments for building `build_dir`.
pub fn build_args(build_dir: &Path, extra: &[String]) -> Vec<String> {
    let mut args = vec![
        "--build".to_string(),
        build_dir.display().to_string(),
        "--".to_string(),
    ];
    args.extend(extra.iter().cloned());
    args
}

/// Build a profile that `coil configure` has already set up.
pub fn build(manifest_path: &Path, config: &Config, opts: &BuildOptions) -> Result<ProcessBuilder> {
    let (root, dir) = profile_build_dir(manifest_path, config, &opts.profile)?;
    let args = build_args(&dir, &opts.args);

    if opts.dry_run {
        return Ok(ProcessBuilder::new(tool_or_name("cmake")).args(&args).cwd(&root));
    }

    if !dir.is_dir() {
        bail!(
            "profile `{}` is not configured\nhelp: Run `coil configure -p {}` first",
            opts.profile,
            opts.profile
        );
    }

    let command = ProcessBuilder::new(require_tool("cmake")?).args(&args).cwd(&root);
    tracing::info!("building profile `{}`", opts.profile);
    command.run()?;

    Ok(command)
}
