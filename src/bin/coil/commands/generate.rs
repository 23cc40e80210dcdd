//! `coil generate` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::GenerateArgs;
use coil::ops::generate;

pub fn execute(args: GenerateArgs, manifest_path: Option<PathBuf>) -> Result<()> {
    let (manifest_path, config) = super::locate(manifest_path)?;

    let out = generate(&manifest_path, &config, args.output.as_deref())?;
    eprintln!("   Generated {}", out.display());

    Ok(())
}
