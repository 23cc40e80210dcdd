//! `coil clean` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::CleanArgs;
use coil::ops::{clean, CleanOptions};

pub fn execute(args: CleanArgs, manifest_path: Option<PathBuf>) -> Result<()> {
    let (manifest_path, config) = super::locate(manifest_path)?;

    let opts = CleanOptions {
        profile: args.profile,
        all: args.all,
        dry_run: args.dry_run,
    };

    let removed = clean(&manifest_path, &config, &opts)?;

    for dir in &removed {
        if opts.dry_run {
            println!("would remove {}", dir.display());
        } else {
            eprintln!("     Removed {}", dir.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::CleanArgs;
    use clap::Parser;

    fn parse_clean_args(args: &[&str]) -> Result<CleanArgs, clap::Error> {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            clean: CleanArgs,
        }
        TestCli::try_parse_from(args).map(|cli| cli.clean)
    }

    #[test]
    fn test_clean_args() {
        let args = parse_clean_args(&["test", "-p", "debug"]).unwrap();
        assert_eq!(args.profile.as_deref(), Some("debug"));

        assert!(parse_clean_args(&["test", "--all"]).unwrap().all);
        assert!(parse_clean_args(&["test"]).is_err());
        assert!(parse_clean_args(&["test", "-p", "debug", "--all"]).is_err());
    }
}
