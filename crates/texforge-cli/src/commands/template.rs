//! Template command implementation
//!
//! Prints (or writes) a starter spec for a fill mode.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use texforge_spec::{
    is_valid_name, FillMode, FillSpec, GradientAxis, GradientStop, Rgb, TextureSpec,
};

/// Starter spec for a mode.
pub fn template_spec(mode: FillMode, name: &str) -> TextureSpec {
    let (description, size, fill) = match mode {
        FillMode::Solid => (
            "Flat single-color tile",
            (16, 16),
            FillSpec::solid(Rgb::gray(128)),
        ),
        FillMode::Outlined => (
            "UI panel background with a 2px border",
            (64, 32),
            FillSpec::outlined(Rgb::new(43, 43, 43), Rgb::new(224, 224, 224), 2),
        ),
        FillMode::Gradient => (
            "Vertical sky ramp",
            (1, 256),
            FillSpec::gradient(
                GradientAxis::Vertical,
                vec![
                    GradientStop::new(0.0, Rgb::new(20, 40, 120)),
                    GradientStop::new(1.0, Rgb::new(180, 210, 255)),
                ],
            ),
        ),
    };

    TextureSpec::builder(name, fill)
        .description(description)
        .size(size.0, size.1)
        .output(format!("textures/{}.png", name))
        .build()
}

/// Run the template command
///
/// # Arguments
/// * `mode` - Fill mode name (solid, outlined, gradient)
/// * `name` - Texture name for the template (default: derived from the mode)
/// * `out` - File to write; stdout when `None`
pub fn run(mode: &str, name: Option<&str>, out: Option<&str>) -> Result<ExitCode> {
    let fill_mode = FillMode::from_name(mode).ok_or_else(|| anyhow!("unknown fill mode: {}", mode))?;
    let name = name.unwrap_or(default_name(fill_mode));
    if !is_valid_name(name) {
        bail!(
            "invalid texture name '{}' (lowercase letters, digits, '_' or '-', 3-64 chars)",
            name
        );
    }

    let json = template_spec(fill_mode, name)
        .to_json_pretty()
        .context("Failed to serialize template")?;

    match out {
        Some(path) => {
            std::fs::write(Path::new(path), format!("{}\n", json))
                .with_context(|| format!("Failed to write template: {}", path))?;
            println!("{} {} template -> {}", "Wrote:".green().bold(), fill_mode, path);
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

fn default_name(mode: FillMode) -> &'static str {
    match mode {
        FillMode::Solid => "flat-tile",
        FillMode::Outlined => "ui-panel",
        FillMode::Gradient => "sky-ramp",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texforge_spec::validate_spec;

    #[test]
    fn test_templates_are_valid_without_warnings() {
        for mode in FillMode::ALL {
            let spec = template_spec(mode, default_name(mode));
            let result = validate_spec(&spec);
            assert!(result.is_ok(), "{} errors: {:?}", mode, result.errors);
            assert!(result.warnings.is_empty(), "{} warnings: {:?}", mode, result.warnings);
            assert_eq!(spec.fill.mode(), mode);
        }
    }

    #[test]
    fn test_template_round_trips_through_json() {
        let spec = template_spec(FillMode::Gradient, "sky-ramp");
        let json = spec.to_json_pretty().unwrap();
        assert_eq!(TextureSpec::from_json(&json).unwrap(), spec);
    }

    #[test]
    fn test_write_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.json");
        run("outlined", Some("menu-panel"), path.to_str()).unwrap();

        let loaded = crate::input::load_spec(&path).unwrap();
        assert_eq!(loaded.spec.name, "menu-panel");
        assert_eq!(loaded.spec.output_path(), "textures/menu-panel.png");
    }

    #[test]
    fn test_rejects_bad_name() {
        assert!(run("solid", Some("Bad Name"), None).is_err());
        assert!(run("radial", None, None).is_err());
    }
}
