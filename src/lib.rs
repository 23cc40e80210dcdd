//! Coil - a declarative project manifest compiler for CMake
//!
//! This crate reads a `Coil.toml` manifest and produces a complete
//! `CMakeLists.txt`, resolving which third-party dependencies must be fetched
//! and under which conditions.

pub mod core;
pub mod generator;
pub mod ops;
pub mod util;

/// Manifest builders for unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{manifest::Manifest, target::Target};
pub use generator::{GenerateError, GenerateOptions, Generator};
pub use util::context::GlobalContext;
