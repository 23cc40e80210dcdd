//! Coil CLI - compiles Coil.toml into CMakeLists.txt

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("coil=debug")
    } else {
        EnvFilter::new("coil=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let manifest_path = cli.manifest_path;

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, manifest_path),
        Commands::List(args) => commands::list::execute(args, manifest_path),
        Commands::Configure(args) => {
            commands::configure::execute(args, manifest_path, cli.verbose)
        }
        Commands::Build(args) => commands::build::execute(args, manifest_path),
        Commands::Test(args) => commands::test::execute(args, manifest_path),
        Commands::Clean(args) => commands::clean::execute(args, manifest_path),
        Commands::Init(args) => commands::init::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
