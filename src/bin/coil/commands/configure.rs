//! `coil configure` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::ConfigureArgs;
use coil::ops::{configure, ConfigureOptions};

pub fn execute(args: ConfigureArgs, manifest_path: Option<PathBuf>, verbose: bool) -> Result<()> {
    let (manifest_path, config) = super::locate(manifest_path)?;

    let opts = ConfigureOptions {
        profile: args.profile,
        definitions: args.definitions,
        verbose,
        dry_run: args.dry_run,
    };

    let result = configure(&manifest_path, &config, &opts)?;

    if opts.dry_run {
        println!("{}", result.command.display_command());
    } else {
        eprintln!("  Configured profile `{}`", opts.profile);
    }

    Ok(())
}
