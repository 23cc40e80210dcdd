//! Implementation of `coil generate`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::Manifest;
use crate::generator::Generator;
use crate::util::config::Config;
use crate::util::context::project_root;

/// Where the generated script goes for a manifest.
///
/// An explicit output is taken relative to the project root.
pub fn output_path(manifest_path: &Path, config: &Config, output: Option<&Path>) -> PathBuf {
    let root = project_root(manifest_path);
    match output {
        Some(path) => root.join(path),
        None => root.join(config.output()),
    }
}

/// Generate the build script for an already loaded manifest.
pub fn generate_manifest(manifest: &Manifest, config: &Config, out: &Path) -> Result<()> {
    Generator::new(manifest)
        .with_options(config.generate_options())
        .write(out)
        .with_context(|| format!("failed to generate `{}`", manifest.project.name))
}

/// Load the manifest and write its build script.
pub fn generate(manifest_path: &Path, config: &Config, output: Option<&Path>) -> Result<PathBuf> {
    let manifest = Manifest::load(manifest_path)?;
    let out = output_path(manifest_path, config, output);

    generate_manifest(&manifest, config, &out)?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::generate_default_manifest;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("Coil.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_generate_default_output() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = write_manifest(tmp.path(), &generate_default_manifest("hello"));

        let out = generate(&manifest_path, &Config::default(), None).unwrap();

        assert_eq!(out, tmp.path().join("CMakeLists.txt"));
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("project(hello VERSION 0.1.0 LANGUAGES CXX)"));
        assert!(text.contains("add_executable(hello)"));
    }

    #[test]
    fn test_generate_explicit_output() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = write_manifest(tmp.path(), &generate_default_manifest("hello"));

        let out = generate(&manifest_path, &Config::default(), Some(Path::new("gen.cmake"))).unwrap();

        assert_eq!(out, tmp.path().join("gen.cmake"));
        assert!(out.is_file());
        assert!(!tmp.path().join("CMakeLists.txt").exists());
    }

    #[test]
    fn test_generate_failure_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = write_manifest(
            tmp.path(),
            r#"
[project]
name = "demo"
version = "1.0.0"

[[dependencies]]
from = "url"
package = "zlib"
imports = [{ target = "Z::Z", find = "ZLIB" }]

[[targets]]
name = "app"
requirement = "ON"

[[targets.features]]
libraries = [{ targets = ["Z::Z"] }]
"#,
        );

        let err = generate(&manifest_path, &Config::default(), None).unwrap_err();

        assert!(format!("{:#}", err).contains("zlib"));
        assert!(!tmp.path().join("CMakeLists.txt").exists());
    }
}
