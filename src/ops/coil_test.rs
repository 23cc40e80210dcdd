//! Implementation of `coil test`.

use std::path::Path;

use anyhow::Result;

use crate::ops::coil_configure::profile_build_dir;
use crate::util::config::Config;
use crate::util::process::{require_tool, tool_or_name, ProcessBuilder};

/// Pattern selecting every registered test.
const ALL_TESTS: &str = ".*";

/// Options for running a profile's tests.
#[derive(Debug, Clone, Default)]
pub struct TestOptions {
    pub profile: String,

    /// Test name regex, optionally followed by extra CTest flags
    pub args: Vec<String>,

    /// Print the command instead of running it
    pub dry_run: bool,
}

/// CTest arguments for the tests in `build_dir`.
///
/// The first argument is the `-R` pattern unless it looks like a flag.
pub fn test_args(build_dir: &Path, extra: &[String]) -> Vec<String> {
    let mut args = vec![
        "--test-dir".to_string(),
        build_dir.display().to_string(),
        "--output-on-failure".to_string(),
        "-R".to_string(),
    ];

    match extra.first() {
        Some(first) if !first.starts_with('-') => {}
        _ => args.push(ALL_TESTS.to_string()),
    }
    args.extend(extra.iter().cloned());

    args
}

/// Run the tests of a built profile with CTest.
pub fn run_tests(manifest_path: &Path, config: &Config, opts: &TestOptions) -> Result<ProcessBuilder> {
    let (root, dir) = profile_build_dir(manifest_path, config, &opts.profile)?;
    let args = test_args(&dir, &opts.args);

    if opts.dry_run {
        return Ok(ProcessBuilder::new(tool_or_name("ctest")).args(&args).cwd(&root));
    }

    let command = ProcessBuilder::new(require_tool("ctest")?).args(&args).cwd(&root);
    tracing::info!("testing profile `{}`", opts.profile);
    command.run()?;

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Vec<String> {
        let extra: Vec<String> = extra.iter().map(|s| s.to_string()).collect();
        test_args(Path::new("b"), &extra)
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(args(&[]), vec!["--test-dir", "b", "--output-on-failure", "-R", ".*"]);
    }

    #[test]
    fn test_explicit_pattern() {
        assert_eq!(args(&["net_"])[4..], ["net_"]);
    }

    #[test]
    fn test_flags_keep_default_pattern() {
        assert_eq!(args(&["-j", "4"])[4..], [".*", "-j", "4"]);
    }
}
