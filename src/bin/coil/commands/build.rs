//! `coil build` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::BuildArgs;
use coil::ops::{build, BuildOptions};

pub fn execute(args: BuildArgs, manifest_path: Option<PathBuf>) -> Result<()> {
    let (manifest_path, config) = super::locate(manifest_path)?;

    let opts = BuildOptions {
        profile: args.profile,
        args: args.args,
        dry_run: args.dry_run,
    };

    let command = build(&manifest_path, &config, &opts)?;

    if opts.dry_run {
        println!("{}", command.display_command());
    }

    Ok(())
}
