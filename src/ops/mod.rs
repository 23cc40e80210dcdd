//! High-level operations.
//!
//! This module contains the implementation of Coil commands.

pub mod coil_build;
pub mod coil_clean;
pub mod coil_configure;
pub mod coil_generate;
pub mod coil_init;
pub mod coil_list;
pub mod coil_test;

pub use coil_build::{build, BuildOptions};
pub use coil_clean::{clean, CleanOptions};
pub use coil_configure::{configure, configure_args, ConfigureOptions, ConfigureResult};
pub use coil_generate::generate;
pub use coil_init::init_project;
pub use coil_list::{format_entries, format_json, list, ListEntry, ListKind};
pub use coil_test::{run_tests, TestOptions};
