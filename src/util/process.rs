//! Launching CMake and CTest.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{bail, Context, Result};

/// A tool invocation that can be printed for `--dry-run` or run with the
/// terminal attached.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Run from the project root rather than the caller's directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    fn status(&self) -> Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        cmd.status()
            .with_context(|| format!("failed to execute `{}`", self.program.display()))
    }

    /// Run with inherited stdio; a non-zero exit is an error.
    pub fn run(&self) -> Result<()> {
        let status = self.status()?;
        if !status.success() {
            bail!(
                "`{}` failed with exit code {:?}",
                self.display_command(),
                status.code()
            );
        }
        Ok(())
    }

    /// The command line as printed by `--dry-run`.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Locate a tool, falling back to the bare name for dry runs.
pub fn tool_or_name(name: &str) -> PathBuf {
    which::which(name).unwrap_or_else(|_| PathBuf::from(name))
}

/// Locate a tool that is about to be run.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    match which::which(name) {
        Ok(path) => Ok(path),
        Err(_) => bail!("could not find `{}` in PATH", name),
    }
}
