#![deny(missing_docs)]

//! # RAMLDoc CLI
//!
//! Command Line Interface for rendering API descriptions.
//!
//! Supported Commands:
//! - `render`: Description -> flat model -> HTML (or JSON) document.
//! - `flatten`: Description -> flat model, printed as JSON.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod error;
mod flatten;
mod render;
mod renderer;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API description documentation generator")]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render documentation for an API description.
    Render(render::RenderArgs),
    /// Print the flattened render model as JSON.
    Flatten(flatten::FlattenArgs),
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Render(args) => render::execute(args),
        Commands::Flatten(args) => flatten::execute(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
