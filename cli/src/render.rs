#![deny(missing_docs)]

//! # Render Command
//!
//! Reads an API description, flattens it and writes the rendered page.

use crate::error::{CliError, CliResult};
use crate::renderer::OutputFormat;
use log::info;
use ramldoc_core::{flatten_document, parse_document};
use std::fs;
use std::path::PathBuf;

/// Arguments for the render command.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Path to the parsed API description (YAML or JSON).
    #[clap(long, env = "RAMLDOC_INPUT")]
    pub input: PathBuf,

    /// Output file. Prints to stdout when omitted.
    #[clap(long, env = "RAMLDOC_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Html, env = "RAMLDOC_FORMAT")]
    pub format: OutputFormat,
}

/// Executes the render command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &RenderArgs) -> CliResult<()> {
    let rendered = render_file(args)?;

    match &args.output {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(out_path, rendered)?;
            println!("Documentation written to {:?}", out_path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Loads, flattens and renders `args.input` without writing anything.
pub fn render_file(args: &RenderArgs) -> CliResult<String> {
    if !args.input.exists() {
        return Err(CliError::General(format!(
            "API description not found: {:?}",
            args.input
        )));
    }

    // 1. Read and parse
    let content = fs::read_to_string(&args.input)?;
    let document = parse_document(&content)?;

    // 2. Flatten
    let model = flatten_document(&document)?;
    info!(
        "Flattened {:?}: {} resources",
        args.input,
        model.resources.len()
    );

    // 3. Render
    let renderer = args.format.renderer()?;
    Ok(renderer.render(&model)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const API: &str = r#"
title: Notes
resources:
  - relativeUri: /notes
    methods:
      - method: get
"#;

    #[test]
    fn test_execute_writes_html() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        let output = dir.path().join("site/index.html");
        fs::write(&input, API).unwrap();

        let args = RenderArgs {
            input,
            output: Some(output.clone()),
            format: OutputFormat::Html,
        };
        execute(&args).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<h1>Notes</h1>"));
        assert!(html.contains("&#x2F;notes"));
    }

    #[test]
    fn test_render_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.json");
        fs::write(
            &input,
            r#"{"title": "Notes", "resources": [{"relativeUri": "/notes"}]}"#,
        )
        .unwrap();

        let args = RenderArgs {
            input,
            output: None,
            format: OutputFormat::Json,
        };
        let out = render_file(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["resources"][1]["path"], "/notes");
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let args = RenderArgs {
            input: dir.path().join("missing.yaml"),
            output: None,
            format: OutputFormat::Html,
        };
        let err = render_file(&args).unwrap_err();
        assert!(format!("{}", err).contains("API description not found"));
    }

    #[test]
    fn test_unsupported_parameter_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        fs::write(
            &input,
            r#"
title: T
resources:
  - relativeUri: /x
    methods:
      - method: get
        params:
          - displayName: enabled
            type: boolean
"#,
        )
        .unwrap();

        let args = RenderArgs {
            input,
            output: None,
            format: OutputFormat::Json,
        };
        let err = render_file(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::App(ramldoc_core::AppError::UnsupportedParameterType { .. })
        ));
    }
}
