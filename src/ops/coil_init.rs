//! Implementation of `coil init`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::manifest::generate_default_manifest;
use crate::core::MANIFEST_NAME;
use crate::util::fs::{ensure_dir, write_atomic};

/// Write a starter manifest into `path`, creating the directory if needed.
pub fn init_project(path: &Path, name: &str) -> Result<PathBuf> {
    ensure_dir(path)?;

    let manifest_path = path.join(MANIFEST_NAME);
    if manifest_path.exists() {
        bail!("`{}` already exists in `{}`", MANIFEST_NAME, path.display());
    }

    write_atomic(&manifest_path, &generate_default_manifest(name))
        .with_context(|| format!("failed to write {}", MANIFEST_NAME))?;

    let src_dir = path.join("src").join(name);
    ensure_dir(&src_dir)?;

    let main = src_dir.join("main.cpp");
    if !main.exists() {
        std::fs::write(
            &main,
            "#include <cstdio>\n\nint main() {\n    std::puts(\"Hello, coil!\");\n    return 0;\n}\n",
        )
        .with_context(|| format!("failed to write {}", main.display()))?;
    }

    Ok(manifest_path)
}
