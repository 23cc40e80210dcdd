//! `coil init` command

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::cli::InitArgs;
use coil::ops::init_project;

/// Determines the project name from the arguments or directory.
pub fn determine_project_name(name: Option<String>, path: &Path) -> String {
    name.unwrap_or_else(|| {
        let resolved = if path == Path::new(".") {
            std::env::current_dir().ok()
        } else {
            Some(path.to_path_buf())
        };

        resolved
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string()
    })
}

/// Validates a project name for use as a CMake project and target name.
pub fn validate_project_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("project name cannot be empty");
    }

    if name.starts_with('-') || name.starts_with('.') {
        return Err("project name cannot start with a hyphen or dot");
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("project name contains invalid characters");
    }

    Ok(())
}

pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let name = determine_project_name(args.name, &path);

    if let Err(msg) = validate_project_name(&name) {
        bail!("invalid project name `{}`: {}", name, msg);
    }

    init_project(&path, &name)?;
    eprintln!(" Initialized `{}` project", name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_project_name_explicit() {
        let name = determine_project_name(Some("demo".to_string()), Path::new("/x/other"));
        assert_eq!(name, "demo");
    }

    #[test]
    fn test_determine_project_name_from_path() {
        assert_eq!(determine_project_name(None, Path::new("/home/me/widget")), "widget");
        assert_eq!(determine_project_name(None, Path::new("")), "unnamed");
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("my_app-2").is_ok());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("-x").is_err());
        assert!(validate_project_name("my app").is_err());
    }
}
