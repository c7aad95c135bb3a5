//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `validate` and `generate`, so scripts and
//! build tools can consume results without scraping colored text.

use serde::{Deserialize, Serialize};
use texforge_spec::{ValidationError, ValidationResult, ValidationWarning};

use crate::input::InputError;

/// Stable error codes for CLI-level failures. Validation errors pass their
/// own codes (E001...) through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Invalid inline controls
    pub const INVALID_CONTROLS: &str = "CLI_004";
    /// Invalid spec (post-parse validation)
    pub const INVALID_SPEC: &str = "CLI_006";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_009";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_010";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E004")
    pub code: String,
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W003")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Canonical spec hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    /// Hash of what the texture looks like, ignoring name and output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl ValidateOutput {
    /// Output for a loaded spec. `success` follows the validation result.
    pub fn from_validation(
        validation: &ValidationResult,
        spec_hash: Option<String>,
        content_hash: Option<String>,
        source_hash: String,
    ) -> Self {
        let (errors, warnings) = validation_to_json(validation);
        Self {
            success: validation.is_ok(),
            errors,
            warnings,
            spec_hash,
            content_hash,
            source_hash: Some(source_hash),
        }
    }

    /// Output for a spec that could not be loaded.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            spec_hash: None,
            content_hash: None,
            source_hash: None,
        }
    }
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Generation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    /// Canonical spec hash (spec mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    /// BLAKE3 hash of the source file (spec mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Generation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Texture name (spec mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mode: String,
    pub width: u32,
    pub height: u32,
    /// Written file, or `None` when the save was cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<GeneratedFile>,
    pub duration_ms: u64,
}

/// A written PNG file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
    pub bytes: usize,
}

impl GenerateOutput {
    pub fn success(
        result: GenerateResult,
        warnings: Vec<JsonWarning>,
        spec_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            spec_hash,
            source_hash,
        }
    }

    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        spec_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            spec_hash,
            source_hash,
        }
    }
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let mut error = JsonError::new(err.code(), err.to_string());
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Converts all errors and warnings of a validation result.
pub fn validation_to_json(result: &ValidationResult) -> (Vec<JsonError>, Vec<JsonWarning>) {
    (
        result.errors.iter().map(validation_error_to_json).collect(),
        result.warnings.iter().map(validation_warning_to_json).collect(),
    )
}

/// Serializes an output record as pretty JSON and prints it to stdout.
///
/// Falls back to a minimal hand-built record if serialization fails, so the
/// caller always gets one JSON document.
pub fn print_json<T: Serialize>(output: &T) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{}", json),
        Err(e) => println!(
            "{{\"success\":false,\"errors\":[{{\"code\":\"{}\",\"message\":{:?}}}],\"warnings\":[]}}",
            error_codes::JSON_SERIALIZE,
            e.to_string()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use texforge_spec::{ErrorCode, WarningCode};

    #[test]
    fn test_json_error_skips_empty_fields() {
        let json = serde_json::to_value(JsonError::new("E004", "gradient must have at least 1 stop"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "E004", "message": "gradient must have at least 1 stop" })
        );
    }

    #[test]
    fn test_validation_codes_pass_through() {
        let mut result = ValidationResult::default();
        result.add_error(ValidationError::with_path(
            ErrorCode::StopOutOfRange,
            "position 2 must be in [0, 1]",
            "fill.stops[0].position",
        ));
        result.add_warning(ValidationWarning::new(WarningCode::MissingDescription, "no description"));

        let (errors, warnings) = validation_to_json(&result);
        assert_eq!(errors[0].code, "E005");
        assert_eq!(errors[0].path.as_deref(), Some("fill.stops[0].position"));
        assert_eq!(warnings[0].code, "W004");
        assert_eq!(warnings[0].path, None);
    }

    #[test]
    fn test_input_error_code() {
        let err = InputError::UnknownExtension {
            extension: Some("yaml".to_string()),
        };
        let json = input_error_to_json(&err, Some("spec.yaml"));
        assert_eq!(json.code, error_codes::UNKNOWN_EXTENSION);
        assert_eq!(json.file.as_deref(), Some("spec.yaml"));
    }

    #[test]
    fn test_validate_output_failure_shape() {
        let output = ValidateOutput::failure(vec![JsonError::new(error_codes::JSON_PARSE, "bad")]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("spec_hash").is_none());
        assert_eq!(json["errors"][0]["code"], "CLI_003");
    }
}
