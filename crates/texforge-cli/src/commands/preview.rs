//! Preview command implementation
//!
//! Renders a texture straight to the terminal without writing anything.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use texforge_backend::PreviewSession;

use super::validate::print_validation_results;
use crate::controls::FillControls;
use crate::host::{show_sample, CliHost, TextureRequest};
use crate::input::load_spec;

/// Run the preview command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file; `None` previews the inline controls
/// * `controls` - Inline fill controls (ignored when a spec is given)
/// * `max_width` - Maximum preview width in terminal columns
///
/// # Returns
/// Exit code: 0 success, 1 if the fill is invalid
pub fn run(spec_path: Option<&str>, controls: &FillControls, max_width: u32) -> Result<ExitCode> {
    let request = match spec_path {
        Some(path) => {
            println!("{} {}", "Preview:".cyan().bold(), path);
            let loaded = load_spec(Path::new(path))
                .with_context(|| format!("Failed to load spec file: {}", path))?;
            TextureRequest::from_spec(&loaded.spec)
        }
        None => {
            let request = controls.to_request().context("Invalid fill controls")?;
            println!("{} inline controls", "Preview:".cyan().bold());
            request
        }
    };

    let validation = request.validate();
    print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Fill has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    println!(
        "{} {} ({})\n",
        "Texture:".dimmed(),
        request.fill.mode(),
        request.dims
    );

    let mut host = CliHost::new(request, None, std::io::stdout()).with_max_width(max_width);
    let mut session = PreviewSession::new();
    show_sample(&mut host, &mut session)?;
    session.end();

    Ok(ExitCode::SUCCESS)
}
