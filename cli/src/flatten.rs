#![deny(missing_docs)]

//! # Flatten Command
//!
//! Prints the flat render model as JSON, for inspecting what a template
//! would receive.

use crate::error::CliResult;
use crate::render::{render_file, RenderArgs};
use crate::renderer::OutputFormat;
use std::path::PathBuf;

/// Arguments for the flatten command.
#[derive(clap::Args, Debug, Clone)]
pub struct FlattenArgs {
    /// Path to the parsed API description (YAML or JSON).
    #[clap(long, env = "RAMLDOC_INPUT")]
    pub input: PathBuf,
}

/// Executes the flatten command.
pub fn execute(args: &FlattenArgs) -> CliResult<()> {
    let render_args = RenderArgs {
        input: args.input.clone(),
        output: None,
        format: OutputFormat::Json,
    };
    println!("{}", render_file(&render_args)?);
    Ok(())
}
