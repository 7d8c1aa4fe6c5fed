#![deny(missing_docs)]

//! # OpenAPI Slicer CLI
//!
//! Command line interface over `slicer-core`: filters an OpenAPI document
//! by a path regular expression and prints or writes the sliced result.

use clap::Parser;
use regex::Regex;
use slicer_core::OpenapiSlicer;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::{CliError, CliResult};

mod error;

/// Slices an OpenAPI spec down to the paths matching a regular expression
/// plus everything they transitively reference.
#[derive(Parser, Debug)]
#[clap(name = "openapi-slicer", version, about)]
struct Cli {
    /// Input OpenAPI file path (.json, .yml or .yaml).
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Regex pattern for filtering paths.
    #[clap(short, long)]
    regex: Option<String>,

    /// Output file path; prints the filtered spec to stdout when omitted.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Reports every missing required option.
    ///
    /// `--input` and `--regex` are declared optional to clap so that one
    /// `Missing option: --<flag>` line is printed per absent flag, instead
    /// of clap's own error text.
    fn missing_options(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.input.is_none() {
            missing.push("--input");
        }
        if self.regex.is_none() {
            missing.push("--regex");
        }
        missing
    }
}

/// Executes the slice. Requires `input` and `regex` to be present.
fn run(cli: &Cli) -> CliResult<()> {
    let Some((input, pattern)) = cli.input.as_ref().zip(cli.regex.as_ref()) else {
        return Err(CliError::General("missing required options".into()));
    };

    let regex = Regex::new(pattern)?;
    let slicer = OpenapiSlicer::from_file(input)?;

    match &cli.output {
        Some(target) => {
            slicer.export(&regex, target)?;
            println!("File created: {}", target.display());
        }
        None => {
            let result = slicer.filter(&regex)?;
            let rendered = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::General(format!("failed to render output: {}", e)))?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let missing = cli.missing_options();
    if !missing.is_empty() {
        for flag in &missing {
            println!("Missing option: {}", flag);
        }
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_options_reports_each_flag() {
        let cli = Cli {
            input: None,
            regex: None,
            output: None,
        };
        assert_eq!(cli.missing_options(), ["--input", "--regex"]);

        let cli = Cli {
            input: Some(PathBuf::from("spec.json")),
            regex: None,
            output: None,
        };
        assert_eq!(cli.missing_options(), ["--regex"]);
    }

    #[test]
    fn test_missing_options_empty_when_required_present() {
        let cli = Cli {
            input: Some(PathBuf::from("spec.json")),
            regex: Some("^/pets".into()),
            output: None,
        };
        assert!(cli.missing_options().is_empty());
    }

    fn write_minimal_spec(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("spec.json");
        let spec = r#"{
            "openapi": "3.0.0",
            "info": {"title": "T", "version": "1.0"},
            "paths": {
                "/pets": {
                    "get": {
                        "responses": {"200": {"description": "ok"}}
                    }
                }
            }
        }"#;
        fs::write(&path, spec).unwrap();
        path
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_minimal_spec(&dir);
        let output = dir.path().join("sliced.json");

        let cli = Cli {
            input: Some(input),
            regex: Some("^/pets".into()),
            output: Some(output.clone()),
        };
        run(&cli).unwrap();

        let sliced: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(sliced["paths"].as_object().unwrap().contains_key("/pets"));
    }

    #[test]
    fn test_run_without_output_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_minimal_spec(&dir);

        let cli = Cli {
            input: Some(input.clone()),
            regex: Some("^/pets".into()),
            output: None,
        };
        run(&cli).unwrap();

        // Only the input spec may exist; the result went to stdout
        let entries: Vec<PathBuf> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(entries, [input]);
    }

    #[test]
    fn test_run_rejects_invalid_regex() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_minimal_spec(&dir);

        let cli = Cli {
            input: Some(input),
            regex: Some("[".into()),
            output: None,
        };
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, CliError::Regex(_)));
    }

    #[test]
    fn test_run_surfaces_invalid_file_type() {
        let cli = Cli {
            input: Some(PathBuf::from("spec.txt")),
            regex: Some(".".into()),
            output: None,
        };
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, CliError::App(_)));
    }
}
