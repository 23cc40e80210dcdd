//! Manifest to CMake compiler.
//!
//! Output is assembled from two regions. The prologue holds the header,
//! project block, global features and, once every target has been scanned,
//! the dependency fetch directives. The epilogue holds target declarations
//! and scripts. The final script is the prologue followed by the epilogue,
//! written in one step so that a failed generation leaves no file behind.

pub mod condition;
pub mod errors;
pub mod global;
pub mod resolver;
pub mod script;
pub mod target;
pub mod writer;

use std::path::Path;

use crate::core::Manifest;
use crate::util::fs::write_atomic;

pub use errors::GenerateError;
pub use resolver::{DependencyResolver, FetchGate, Usage};
pub use writer::ScriptWriter;

/// Default `cmake_minimum_required` version.
pub const DEFAULT_CMAKE_MINIMUM: &str = "3.30.0";

/// Settings that shape the generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// How dependency usage conditions gate fetching
    pub fetch_gate: FetchGate,
    pub cmake_minimum: String,
    /// Languages passed to `project()`
    pub languages: Vec<String>,
    /// Version written into the header comment
    pub tool_version: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            fetch_gate: FetchGate::default(),
            cmake_minimum: DEFAULT_CMAKE_MINIMUM.to_string(),
            languages: vec!["CXX".to_string()],
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Compiles a manifest into a CMake script.
#[derive(Debug)]
pub struct Generator<'m> {
    manifest: &'m Manifest,
    options: GenerateOptions,
}

impl<'m> Generator<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Generator {
            manifest,
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate the full script text.
    pub fn generate(&self) -> Result<String, GenerateError> {
        let manifest = self.manifest;
        let mut prologue = ScriptWriter::new();
        let mut epilogue = ScriptWriter::new();

        global::emit_header(&mut prologue, &self.options.tool_version);
        global::emit_project(
            &mut prologue,
            &manifest.project,
            &self.options.cmake_minimum,
            &self.options.languages,
        );
        global::include_phase(&mut prologue, 1);
        global::include_phase(&mut prologue, 2);

        let mut resolver = DependencyResolver::new(&manifest.dependencies)?;

        for feature in &manifest.features {
            global::emit_global_feature(&mut prologue, feature);
        }

        global::include_phase(&mut epilogue, 3);

        let count = manifest.targets.len();
        for (index, target) in manifest.targets.iter().enumerate() {
            target::emit_target(&mut epilogue, &mut resolver, target, index, count)?;
        }

        let fetched = resolver.flush(&mut prologue, self.options.fetch_gate)?;
        tracing::debug!("{} fetch directives, {} targets", fetched, count);

        for script in &manifest.scripts {
            script::emit_script(&mut epilogue, script);
        }

        global::include_phase(&mut epilogue, 4);

        let mut text = prologue.into_string();
        text.push_str(epilogue.as_str());
        Ok(text)
    }

    /// Generate and write the script to `path`.
    ///
    /// The file is replaced atomically and only after generation succeeded.
    pub fn write(&self, path: &Path) -> Result<(), GenerateError> {
        let text = self.generate()?;

        write_atomic(path, &text).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("generated {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dependency, SourceKind, Target, TargetKind};
    use crate::test_support::fixtures;
    use tempfile::TempDir;

    #[test]
    fn test_single_executable() {
        let manifest = fixtures::manifest()
            .target(Target::new("app", TargetKind::Executable, "ALWAYS"))
            .build();

        let text = Generator::new(&manifest).generate().unwrap();

        assert!(text.contains("add_executable(app)\n"));
        assert!(text.contains("[01/01]"));
        assert!(!text.contains("coil_fetch"));
        assert!(!text.contains("find_package"));
    }

    #[test]
    fn test_shared_dependency_fetched_once() {
        let manifest = fixtures::manifest()
            .dependency(
                Dependency::new(SourceKind::Url, "zlib/1.3")
                    .with_path("https://example/zlib")
                    .with_import("Z::Z", "ZLIB REQUIRED"),
            )
            .target(fixtures::linked_target("a", "A", &["Z::Z"]))
            .target(fixtures::linked_target("b", "B", &["Z::Z"]))
            .build();

        let text = Generator::new(&manifest).generate().unwrap();

        assert_eq!(text.matches("coil_fetch_url(\"zlib\"").count(), 1);
        assert!(text.contains("if((A) AND (B))\ncoil_fetch_url(\"zlib\" \"https://example/zlib\" \"1.3\")\n"));
        assert_eq!(text.matches("find_package(ZLIB REQUIRED)").count(), 2);
    }

    #[test]
    fn test_any_gate_option() {
        let manifest = fixtures::manifest()
            .dependency(Dependency::new(SourceKind::Registry, "fmt").with_import("fmt::fmt", "fmt"))
            .target(fixtures::linked_target("a", "A", &["fmt::fmt"]))
            .target(fixtures::linked_target("b", "B", &["fmt::fmt"]))
            .build();

        let options = GenerateOptions {
            fetch_gate: FetchGate::Any,
            ..Default::default()
        };
        let text = Generator::new(&manifest).with_options(options).generate().unwrap();

        assert!(text.contains("if((A) OR (B))\ncoil_fetch_pkg(\"fmt\")\nendif()\n"));
    }

    #[test]
    fn test_region_order() {
        let manifest = fixtures::manifest()
            .dependency(Dependency::new(SourceKind::Registry, "fmt").with_import("fmt::fmt", "fmt"))
            .feature(fixtures::option("FAST", "on"))
            .target(fixtures::linked_target("a", "ON", &["fmt::fmt"]))
            .script(crate::core::Script::new("lint").command("clang-tidy"))
            .build();

        let text = Generator::new(&manifest).generate().unwrap();

        let position = |needle: &str| {
            text.find(needle)
                .unwrap_or_else(|| panic!("missing `{}` in\n{}", needle, text))
        };

        assert!(text.starts_with("# Generated by coil"));
        assert!(position("project(demo") < position("coil.1.cmake"));
        assert!(position("coil.1.cmake") < position("coil.2.cmake"));
        assert!(position("coil.2.cmake") < position("set(FAST on"));
        assert!(position("set(FAST on") < position("coil_fetch_pkg"));
        assert!(position("coil_fetch_pkg") < position("coil.3.cmake"));
        assert!(position("coil.3.cmake") < position("add_executable(a)"));
        assert!(position("add_executable(a)") < position("add_custom_target(lint"));
        assert!(position("add_custom_target(lint") < position("coil.4.cmake"));
        assert!(text.ends_with("include(\"${COIL_DIR}/coil.4.cmake\")\n"));
    }

    #[test]
    fn test_progress_counter() {
        let manifest = fixtures::manifest()
            .target(Target::new("a", TargetKind::Executable, "ON"))
            .target(Target::new("b", TargetKind::StaticLibrary, "ON"))
            .build();

        let text = Generator::new(&manifest).generate().unwrap();
        assert!(text.contains("\"[01/02] a\""));
        assert!(text.contains("\"[02/02] b\""));
    }

    #[test]
    fn test_write_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakeLists.txt");
        let manifest = fixtures::manifest()
            .target(Target::new("app", TargetKind::Executable, "ALWAYS"))
            .build();

        Generator::new(&manifest).write(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("add_executable(app)"));
    }

    #[test]
    fn test_failed_generation_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakeLists.txt");
        let manifest = fixtures::manifest()
            .dependency(Dependency::new(SourceKind::Url, "badpkg").with_import("B::B", "B"))
            .target(fixtures::linked_target("app", "ALWAYS", &["B::B"]))
            .build();

        let err = Generator::new(&manifest).write(&path).unwrap_err();
        assert!(err.is_manifest_error());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_generation_keeps_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakeLists.txt");
        std::fs::write(&path, "# previous\n").unwrap();

        let manifest = fixtures::manifest()
            .dependency(
                Dependency::new(SourceKind::Unsupported("svn".to_string()), "x/1")
                    .with_import("X::X", "X"),
            )
            .target(fixtures::linked_target("app", "ALWAYS", &["X::X"]))
            .build();

        let err = Generator::new(&manifest).write(&path).unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedProvider { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# previous\n");
    }
}
