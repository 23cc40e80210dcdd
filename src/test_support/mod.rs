//! Test utilities for Coil unit tests.
//!
//! Provides builders for in-memory manifests so generator tests can describe
//! just the parts of a project they exercise.
//!
//! # Example
//!
//! ```rust,ignore
//! use coil::test_support::fixtures;
//!
//! let manifest = fixtures::manifest()
//!     .target(fixtures::linked_target("app", "ALWAYS", &["fmt::fmt"]))
//!     .build();
//! ```

pub mod fixtures;

pub use fixtures::*;
