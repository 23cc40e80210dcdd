//! Implementation of `coil configure`.
//!
//! Regenerates the build script and runs CMake with the settings of one
//! manifest profile.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::core::{Manifest, Profile};
use crate::ops::coil_generate::{generate_manifest, output_path};
use crate::util::config::Config;
use crate::util::context::project_root;
use crate::util::process::{require_tool, tool_or_name, ProcessBuilder};

/// Options for configuring a project.
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    /// Profile name
    pub profile: String,

    /// Extra `KEY=VALUE` definitions passed as `-D` arguments
    pub definitions: Vec<String>,

    /// Ask CMake for extra warnings
    pub verbose: bool,

    /// Print the command instead of running it
    pub dry_run: bool,
}

/// Result of a configure run.
#[derive(Debug)]
pub struct ConfigureResult {
    /// The CMake invocation
    pub command: ProcessBuilder,

    /// Generated script, absent for dry runs
    pub script: Option<PathBuf>,
}

/// Directory holding coil state and the helper scripts.
pub fn coil_dir(root: &Path) -> PathBuf {
    root.join(".coil")
}

/// Build directory for a profile.
pub fn build_dir(root: &Path, config: &Config, profile: &Profile) -> PathBuf {
    let base = match &config.configure.build_dir {
        Some(dir) => root.join(dir),
        None => coil_dir(root),
    };
    base.join(&profile.name)
}

/// Join whitespace separated flags into a CMake list.
fn flag_list(flags: &[String]) -> String {
    flags
        .iter()
        .flat_map(|f| f.split_whitespace())
        .collect::<Vec<_>>()
        .join(";")
}

/// Build the CMake arguments for a profile.
pub fn configure_args(
    root: &Path,
    config: &Config,
    profile: &Profile,
    opts: &ConfigureOptions,
) -> Vec<String> {
    let mut args = vec![
        format!("-DCOIL_DIR={}", coil_dir(root).display()),
        "-B".to_string(),
        build_dir(root, config, profile).display().to_string(),
        "-S".to_string(),
        root.display().to_string(),
        "-G".to_string(),
        config.cmake_generator().to_string(),
    ];

    if opts.verbose {
        args.extend(
            ["--warn-uninitialized", "--warn-unused-vars", "--check-system-vars"]
                .map(String::from),
        );
    }

    if !profile.build_type.is_empty() {
        args.push(format!("-DCMAKE_BUILD_TYPE={}", profile.build_type));
    }

    if !profile.link_flags.is_empty() {
        args.push(format!(
            "-DCOIL_GLOBAL_LINKER_OPTIONS={}",
            flag_list(&profile.link_flags)
        ));
    }

    if !profile.compile_flags.is_empty() {
        args.push(format!(
            "-DCOIL_GLOBAL_COMPILE_OPTIONS={}",
            flag_list(&profile.compile_flags)
        ));
    }

    if !profile.compiler.is_empty() {
        args.push(format!("-DCMAKE_CXX_COMPILER={}", profile.compiler));
    }

    for variables in &profile.variables {
        for (key, value) in variables {
            tracing::debug!("set: {} {}", key, value);
            args.push(format!("-D{}={}", key, value));
        }
    }

    for definition in &opts.definitions {
        args.push(format!("-D{}", definition));
    }

    args
}

/// Load the manifest and return the project root and build directory of
/// one of its profiles.
pub fn profile_build_dir(
    manifest_path: &Path,
    config: &Config,
    name: &str,
) -> Result<(PathBuf, PathBuf)> {
    let manifest = Manifest::load(manifest_path)?;
    let root = project_root(manifest_path);
    let dir = build_dir(&root, config, find_profile(&manifest, name)?);
    Ok((root, dir))
}

/// Look up a profile, listing the available ones on failure.
pub fn find_profile<'m>(manifest: &'m Manifest, name: &str) -> Result<&'m Profile> {
    manifest.profile(name).ok_or_else(|| {
        let available: Vec<&str> = manifest.profiles.iter().map(|p| p.name.as_str()).collect();
        if available.is_empty() {
            anyhow!("profile `{}` not found; the manifest declares no profiles", name)
        } else {
            anyhow!(
                "profile `{}` not found\n\nAvailable profiles: {}",
                name,
                available.join(", ")
            )
        }
    })
}

/// Configure the project at `manifest_path`.
pub fn configure(
    manifest_path: &Path,
    config: &Config,
    opts: &ConfigureOptions,
) -> Result<ConfigureResult> {
    let manifest = Manifest::load(manifest_path)?;
    let root = project_root(manifest_path);
    let profile = find_profile(&manifest, &opts.profile)?;

    let args = configure_args(&root, config, profile, opts);

    if opts.dry_run {
        return Ok(ConfigureResult {
            command: ProcessBuilder::new(tool_or_name("cmake")).args(&args).cwd(&root),
            script: None,
        });
    }

    let cmake = require_tool("cmake")?;

    let script = output_path(manifest_path, config, None);
    generate_manifest(&manifest, config, &script)?;

    let command = ProcessBuilder::new(cmake).args(&args).cwd(&root);
    tracing::info!("configuring profile `{}`", profile.name);
    tracing::debug!("{}", command.display_command());
    command.run()?;

    Ok(ConfigureResult {
        command,
        script: Some(script),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn release_profile() -> Profile {
        let mut variables = BTreeMap::new();
        variables.insert("B_OPT".to_string(), "2".to_string());
        variables.insert("A_OPT".to_string(), "1".to_string());

        Profile {
            name: "release".to_string(),
            build_type: "Release".to_string(),
            compiler: "clang++".to_string(),
            variables: vec![variables],
            link_flags: vec!["-flto -s".to_string()],
            compile_flags: vec!["-O3".to_string(), "-march=native".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_configure_args_full_profile() {
        let opts = ConfigureOptions {
            profile: "release".to_string(),
            definitions: vec!["EXTRA=on".to_string()],
            ..Default::default()
        };

        let args = configure_args(Path::new("/p"), &Config::default(), &release_profile(), &opts);

        assert_eq!(
            args,
            vec![
                "-DCOIL_DIR=/p/.coil",
                "-B",
                "/p/.coil/release",
                "-S",
                "/p",
                "-G",
                "Ninja",
                "-DCMAKE_BUILD_TYPE=Release",
                "-DCOIL_GLOBAL_LINKER_OPTIONS=-flto;-s",
                "-DCOIL_GLOBAL_COMPILE_OPTIONS=-O3;-march=native",
                "-DCMAKE_CXX_COMPILER=clang++",
                "-DA_OPT=1",
                "-DB_OPT=2",
                "-DEXTRA=on",
            ]
        );
    }

    #[test]
    fn test_configure_args_minimal_profile() {
        let profile = Profile {
            name: "plain".to_string(),
            ..Default::default()
        };
        let opts = ConfigureOptions {
            verbose: true,
            ..Default::default()
        };

        let args = configure_args(Path::new("/p"), &Config::default(), &profile, &opts);

        assert_eq!(args.len(), 10);
        assert!(args.contains(&"--warn-uninitialized".to_string()));
        assert!(!args.iter().any(|a| a.starts_with("-DCMAKE_BUILD_TYPE")));
    }

    #[test]
    fn test_build_dir_from_config() {
        let mut config = Config::default();
        config.configure.build_dir = Some(PathBuf::from("out"));
        config.configure.generator = Some("Unix Makefiles".to_string());

        let args = configure_args(
            Path::new("/p"),
            &config,
            &release_profile(),
            &ConfigureOptions::default(),
        );

        assert_eq!(args[2], "/p/out/release");
        assert_eq!(args[6], "Unix Makefiles");
    }

    #[test]
    fn test_unknown_profile() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join("Coil.toml");
        std::fs::write(
            &manifest_path,
            crate::core::manifest::generate_default_manifest("demo"),
        )
        .unwrap();

        let opts = ConfigureOptions {
            profile: "nope".to_string(),
            dry_run: true,
            ..Default::default()
        };

        let err = configure(&manifest_path, &Config::default(), &opts).unwrap_err();
        assert!(err.to_string().contains("Available profiles: debug"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join("Coil.toml");
        std::fs::write(
            &manifest_path,
            crate::core::manifest::generate_default_manifest("demo"),
        )
        .unwrap();

        let opts = ConfigureOptions {
            profile: "debug".to_string(),
            dry_run: true,
            ..Default::default()
        };

        let result = configure(&manifest_path, &Config::default(), &opts).unwrap();

        assert!(result.script.is_none());
        assert!(result
            .command
            .get_args()
            .contains(&"-DCMAKE_BUILD_TYPE=Debug".to_string()));
        assert!(!tmp.path().join("CMakeLists.txt").exists());
    }
}
