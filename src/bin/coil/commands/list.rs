//! `coil list` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::ListArgs;
use coil::ops::{format_entries, format_json, list, ListKind};
use coil::Manifest;

/// Which listing the flags select.
pub fn list_kind(args: &ListArgs) -> ListKind {
    if args.targets {
        ListKind::Targets
    } else if args.profiles {
        ListKind::Profiles
    } else {
        ListKind::Options
    }
}

pub fn execute(args: ListArgs, manifest_path: Option<PathBuf>) -> Result<()> {
    let (manifest_path, _config) = super::locate(manifest_path)?;
    let manifest = Manifest::load(&manifest_path)?;

    let entries = list(&manifest, list_kind(&args));

    if args.json {
        println!("{}", format_json(&entries)?);
    } else {
        print!("{}", format_entries(&entries));
    }

    Ok(())
}
