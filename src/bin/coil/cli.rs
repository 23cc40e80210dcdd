//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

/// Coil - compiles a declarative project manifest into CMake
#[derive(Parser)]
#[command(name = "coil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to Coil.toml (defaults to searching upward from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CMakeLists.txt from Coil.toml
    Generate(GenerateArgs),

    /// List targets, profiles or options
    List(ListArgs),

    /// Regenerate and configure the build with CMake
    Configure(ConfigureArgs),

    /// Build a configured profile
    Build(BuildArgs),

    /// Run a profile's tests with CTest
    Test(TestArgs),

    /// Remove profile build directories
    Clean(CleanArgs),

    /// Create a Coil.toml in a directory
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Output file, relative to the project root
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("kind").required(true).args(["targets", "profiles", "options"])))]
pub struct ListArgs {
    /// List project build targets
    #[arg(short, long)]
    pub targets: bool,

    /// List project build profiles
    #[arg(short, long)]
    pub profiles: bool,

    /// List project build options
    #[arg(short, long)]
    pub options: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ConfigureArgs {
    /// Profile to configure
    #[arg(short, long)]
    pub profile: String,

    /// Print the CMake command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Extra definitions passed to CMake as -DKEY=VALUE
    #[arg(value_name = "KEY=VALUE")]
    pub definitions: Vec<String>,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Profile to build
    #[arg(short, long)]
    pub profile: String,

    /// Print the CMake command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Arguments passed to the native build tool
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Args)]
pub struct TestArgs {
    /// Profile whose tests to run
    #[arg(short, long)]
    pub profile: String,

    /// Print the CTest command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Test name pattern, then extra CTest arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Profile to reset
    #[arg(short, long, required_unless_present = "all")]
    pub profile: Option<String>,

    /// Reset every profile's build directory
    #[arg(short, long, conflicts_with = "profile")]
    pub all: bool,

    /// List the directories that would be removed
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct InitArgs {
    /// Project name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
