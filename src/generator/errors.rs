//! Generation error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error while generating a build script.
///
/// Every variant aborts generation; nothing is written when one is returned.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("package name cannot be empty: `{package}`")]
    EmptyPackageName { package: String },

    #[error("invalid package `{package}`: expected NAME/VERSION for {from} dependencies")]
    MissingVersionSeparator { package: String, from: String },

    #[error("unsupported dependency provider `{from}` for package `{package}`")]
    UnsupportedProvider { package: String, from: String },

    #[error("target `{target}` has an empty requirement; use COIL_ALWAYS_BUILD to always build it")]
    EmptyRequirement { target: String },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// True for errors caused by the manifest rather than the filesystem.
    pub fn is_manifest_error(&self) -> bool {
        !matches!(self, GenerateError::Io { .. })
    }
}
