//! Spec validation logic.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::fill::{FillSpec, GradientStop};
use crate::spec::{Dimensions, TextureSpec, SPEC_VERSION};

/// Regex pattern for valid texture names.
/// Format: starts with lowercase letter, followed by 2-63 lowercase letters, digits, underscores, or hyphens.
const NAME_PATTERN: &str = r"^[a-z][a-z0-9_-]{2,63}$";

/// Largest accepted texture edge in pixels.
pub const MAX_TEXTURE_EDGE: u32 = 16384;

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| Regex::new(NAME_PATTERN).expect("invalid regex pattern"))
}

/// Validates a spec and returns a validation result.
///
/// # Example
/// ```
/// use texforge_spec::{FillSpec, Rgb, TextureSpec};
/// use texforge_spec::validation::validate_spec;
///
/// let spec = TextureSpec::builder("red-tile", FillSpec::solid(Rgb::RED))
///     .size(16, 16)
///     .description("Flat red tile")
///     .build();
///
/// let result = validate_spec(&spec);
/// assert!(result.is_ok());
/// ```
pub fn validate_spec(spec: &TextureSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_spec_version(spec, &mut result);
    validate_name(spec, &mut result);
    validate_size(spec, &mut result);
    result.merge(validate_fill(&spec.fill, spec.dimensions()));
    validate_output(spec, &mut result);

    if spec.description.as_deref().map_or(true, |d| d.trim().is_empty()) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescription,
            "spec has no description",
            "description",
        ));
    }

    result
}

/// Checks if a texture name matches the naming rules.
pub fn is_valid_name(name: &str) -> bool {
    name_regex().is_match(name)
}

/// Checks if an output path is safe to join onto an output root.
pub fn is_safe_output_path(path: &str) -> bool {
    output_path_safety_errors(path).is_empty()
}

/// Checks if an output path names a `.png` file (case-insensitive).
pub fn has_png_extension(path: &str) -> bool {
    path.to_ascii_lowercase().ends_with(".png")
}

fn validate_spec_version(spec: &TextureSpec, result: &mut ValidationResult) {
    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }
}

fn validate_name(spec: &TextureSpec, result: &mut ValidationResult) {
    if !is_valid_name(&spec.name) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidName,
            format!(
                "name '{}' must match pattern {}",
                spec.name, NAME_PATTERN
            ),
            "name",
        ));
    }
}

fn validate_size(spec: &TextureSpec, result: &mut ValidationResult) {
    for (i, (edge, label)) in spec.size.iter().zip(["width", "height"]).enumerate() {
        let path = format!("size[{}]", i);
        if *edge == 0 {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::ZeroSizeClamped,
                format!("{} is 0 and will be clamped to 1", label),
                path,
            ));
        } else if *edge > MAX_TEXTURE_EDGE {
            result.add_error(ValidationError::with_path(
                ErrorCode::SizeTooLarge,
                format!(
                    "{} {} exceeds the maximum of {}",
                    label, edge, MAX_TEXTURE_EDGE
                ),
                path,
            ));
        }
    }
}

/// Validates a fill against the dimensions it will be synthesized at.
///
/// Used directly for fills that do not come from a spec file.
pub fn validate_fill(fill: &FillSpec, dims: Dimensions) -> ValidationResult {
    let mut result = ValidationResult::default();
    match fill {
        FillSpec::Solid { .. } => {}
        FillSpec::Outlined {
            outline_thickness, ..
        } => {
            let band = 2 * u64::from(*outline_thickness);
            if band >= u64::from(dims.width()) || band >= u64::from(dims.height()) {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::OutlineCoversTexture,
                    format!(
                        "outline thickness {} leaves no interior in a {} texture",
                        outline_thickness, dims
                    ),
                    "fill.outline_thickness",
                ));
            }
        }
        FillSpec::Gradient { stops, .. } => validate_stops(stops, &mut result),
    }
    result
}

fn validate_stops(stops: &[GradientStop], result: &mut ValidationResult) {
    if stops.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyGradient,
            "gradient must have at least 1 stop",
            "fill.stops",
        ));
        return;
    }

    for (i, stop) in stops.iter().enumerate() {
        if !stop.position.is_finite() || !(0.0..=1.0).contains(&stop.position) {
            result.add_error(ValidationError::with_path(
                ErrorCode::StopOutOfRange,
                format!("position {} must be in [0, 1]", stop.position),
                format!("fill.stops[{}].position", i),
            ));
        }
    }

    if stops.windows(2).any(|w| w[1].position < w[0].position) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnorderedStops,
            "stops are not in ascending position order and will be sorted",
            "fill.stops",
        ));
    }
}

fn validate_output(spec: &TextureSpec, result: &mut ValidationResult) {
    let Some(path) = spec.output.as_deref() else {
        return;
    };

    for message in output_path_safety_errors(path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeOutputPath,
            message,
            "output",
        ));
    }

    if !has_png_extension(path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::PathFormatMismatch,
            format!("output path '{}' must end in .png", path),
            "output",
        ));
    }
}

fn output_path_safety_errors(path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if path.is_empty() {
        errors.push("output path cannot be empty".to_string());
        return errors;
    }

    if path.starts_with('/') || path.starts_with('\\') {
        errors.push(format!("output path must be relative, not absolute: '{}'", path));
    }

    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        errors.push(format!("output path must not contain drive letter: '{}'", path));
    }

    if path.contains('\\') {
        errors.push(format!("output path must use forward slashes only: '{}'", path));
    }

    if path.split('/').any(|segment| segment == "..") {
        errors.push(format!("output path must not contain '..': '{}'", path));
    }

    errors
}
