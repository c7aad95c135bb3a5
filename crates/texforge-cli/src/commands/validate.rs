//! Validate command implementation
//!
//! Checks a spec file without synthesizing anything.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use texforge_spec::{canonical_content_hash, canonical_spec_hash, validate_spec, ValidationResult};

use super::json_output::{input_error_to_json, print_json, ValidateOutput};
use crate::input::{load_spec, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

fn run_human(spec_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let LoadResult { spec, source_hash } = load_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let validation = validate_spec(&spec);

    let spec_hash = canonical_spec_hash(&spec).unwrap_or_else(|_| "unknown".to_string());
    let content_hash = canonical_content_hash(&spec).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Spec hash:".dimmed(), spec_hash);
    println!("{} {}", "Content hash:".dimmed(), content_hash);

    print_validation_results(&validation);

    if validation.is_ok() {
        println!(
            "\n{} {} ({} {}, {})",
            "SUCCESS".green().bold(),
            spec.name,
            spec.fill.mode(),
            spec.dimensions(),
            spec.output_path()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Spec has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(spec_path: &str) -> Result<ExitCode> {
    let LoadResult { spec, source_hash } = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&ValidateOutput::failure(vec![input_error_to_json(
                &e,
                Some(spec_path),
            )]));
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_spec(&spec);
    let output = ValidateOutput::from_validation(
        &validation,
        canonical_spec_hash(&spec).ok(),
        canonical_content_hash(&spec).ok(),
        source_hash,
    );
    print_json(&output);

    Ok(if validation.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Print errors and warnings in the colored human format.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    for error in &result.errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path.dimmed(),
            error.message
        );
    }

    for warning in &result.warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            path.dimmed(),
            warning.message
        );
    }
}
