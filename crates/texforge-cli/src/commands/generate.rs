//! Generate command implementation
//!
//! Two entry points share this command: a spec file (`--spec`), or inline
//! fill controls with an optional `--output` path. Inline mode goes through
//! the host interface, so a missing path behaves like a dismissed save dialog.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use texforge_backend::{generate_texture, save_texture_result, PngConfig};
use texforge_spec::{canonical_spec_hash, validate_spec};

use super::json_output::{
    error_codes, input_error_to_json, print_json, validation_to_json, GenerateOutput,
    GenerateResult, GeneratedFile, JsonError,
};
use super::validate::print_validation_results;
use crate::controls::FillControls;
use crate::host::{save_texture, CliHost};
use crate::input::{load_spec, LoadResult};

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file; `None` selects inline mode
/// * `controls` - Inline fill controls (ignored in spec mode)
/// * `out_root` - Output root directory (default: current directory)
/// * `output` - Inline mode save path; `None` cancels the save
/// * `compression` - PNG compression preset (default, best, fast)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success (including a cancelled save), 1 error
pub fn run(
    spec_path: Option<&str>,
    controls: &FillControls,
    out_root: Option<&str>,
    output: Option<&str>,
    compression: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let config = PngConfig::by_name(compression)
        .ok_or_else(|| anyhow!("unknown compression preset: {}", compression))?;

    match (spec_path, json_output) {
        (Some(path), false) => run_spec_human(path, out_root, &config),
        (Some(path), true) => run_spec_json(path, out_root, &config),
        (None, false) => run_inline_human(controls, out_root, output, &config),
        (None, true) => run_inline_json(controls, out_root, output, &config),
    }
}

fn run_spec_human(spec_path: &str, out_root: Option<&str>, config: &PngConfig) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), spec_path);

    let LoadResult { spec, source_hash } = load_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let validation = validate_spec(&spec);
    print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Spec has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let out_root = out_root.unwrap_or(".");
    let result = generate_texture(&spec, config).context("Failed to generate texture")?;
    let path = save_texture_result(&result, Path::new(out_root), &spec.output_path())
        .with_context(|| format!("Failed to write texture under {}", out_root))?;

    println!(
        "{} {} {} ({})",
        "Texture:".dimmed(),
        spec.name,
        spec.fill.mode(),
        spec.dimensions()
    );
    println!("  {} {}", "->".green(), path.display());
    println!("  {} {}", "hash".dimmed(), result.hash);

    println!(
        "\n{} Generated 1 texture ({}ms)",
        "SUCCESS".green().bold(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_spec_json(spec_path: &str, out_root: Option<&str>, config: &PngConfig) -> Result<ExitCode> {
    let start = Instant::now();

    let LoadResult { spec, source_hash } = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = input_error_to_json(&e, Some(spec_path));
            print_json(&GenerateOutput::failure(vec![error], vec![], None, None));
            return Ok(ExitCode::from(1));
        }
    };

    let spec_hash = canonical_spec_hash(&spec).ok();
    let validation = validate_spec(&spec);
    let (errors, warnings) = validation_to_json(&validation);
    if !validation.is_ok() {
        print_json(&GenerateOutput::failure(
            errors,
            warnings,
            spec_hash,
            Some(source_hash),
        ));
        return Ok(ExitCode::from(1));
    }

    let out_root = out_root.unwrap_or(".");
    let written = generate_texture(&spec, config).map_err(anyhow::Error::from).and_then(|result| {
        let path = save_texture_result(&result, Path::new(out_root), &spec.output_path())?;
        Ok((result, path))
    });

    let (result, path) = match written {
        Ok(written) => written,
        Err(e) => {
            let error = JsonError::new(error_codes::GENERATION_ERROR, format!("{:#}", e))
                .with_file(spec_path);
            print_json(&GenerateOutput::failure(
                vec![error],
                warnings,
                spec_hash,
                Some(source_hash),
            ));
            return Ok(ExitCode::from(1));
        }
    };

    let output = GenerateResult {
        name: Some(spec.name.clone()),
        mode: spec.fill.mode().to_string(),
        width: result.width(),
        height: result.height(),
        output: Some(GeneratedFile {
            path: path.display().to_string(),
            hash: result.hash.clone(),
            bytes: result.data.len(),
        }),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    print_json(&GenerateOutput::success(
        output,
        warnings,
        spec_hash,
        Some(source_hash),
    ));
    Ok(ExitCode::SUCCESS)
}

fn run_inline_human(
    controls: &FillControls,
    out_root: Option<&str>,
    output: Option<&str>,
    config: &PngConfig,
) -> Result<ExitCode> {
    let start = Instant::now();
    let request = controls.to_request().context("Invalid fill controls")?;

    println!(
        "{} {} ({})",
        "Generating:".cyan().bold(),
        request.fill.mode(),
        request.dims
    );

    let validation = request.validate();
    print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Controls have {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let mut host = CliHost::new(request, save_path(out_root, output), std::io::stdout());
    match save_texture(&mut host, config)? {
        Some(saved) => {
            println!("  {} {}", "->".green(), saved.path.display());
            println!("  {} {}", "hash".dimmed(), saved.hash);
            println!(
                "\n{} Generated 1 texture ({}ms)",
                "SUCCESS".green().bold(),
                start.elapsed().as_millis()
            );
        }
        None => {
            println!(
                "\n{} Save cancelled (no --output given), nothing written",
                "SKIPPED".yellow().bold()
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_inline_json(
    controls: &FillControls,
    out_root: Option<&str>,
    output: Option<&str>,
    config: &PngConfig,
) -> Result<ExitCode> {
    let start = Instant::now();

    let request = match controls.to_request() {
        Ok(request) => request,
        Err(e) => {
            let error = JsonError::new(error_codes::INVALID_CONTROLS, format!("{:#}", e));
            print_json(&GenerateOutput::failure(vec![error], vec![], None, None));
            return Ok(ExitCode::from(1));
        }
    };

    let validation = request.validate();
    let (errors, warnings) = validation_to_json(&validation);
    if !validation.is_ok() {
        print_json(&GenerateOutput::failure(errors, warnings, None, None));
        return Ok(ExitCode::from(1));
    }

    let mode = request.fill.mode().to_string();
    let dims = request.dims;
    let mut host = CliHost::new(request, save_path(out_root, output), std::io::sink());

    let saved = match save_texture(&mut host, config) {
        Ok(saved) => saved,
        Err(e) => {
            let error = JsonError::new(error_codes::GENERATION_ERROR, format!("{:#}", e));
            print_json(&GenerateOutput::failure(vec![error], warnings, None, None));
            return Ok(ExitCode::from(1));
        }
    };

    let result = GenerateResult {
        name: None,
        mode,
        width: dims.width(),
        height: dims.height(),
        output: saved.map(|saved| GeneratedFile {
            path: saved.path.display().to_string(),
            hash: saved.hash,
            bytes: saved.bytes,
        }),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    print_json(&GenerateOutput::success(result, warnings, None, None));
    Ok(ExitCode::SUCCESS)
}

/// Where inline mode saves: `--output` joined onto `--out-root` when given.
fn save_path(out_root: Option<&str>, output: Option<&str>) -> Option<PathBuf> {
    let output = output.filter(|o| !o.trim().is_empty())?;
    Some(match out_root {
        Some(root) => Path::new(root).join(output),
        None => PathBuf::from(output),
    })
}
