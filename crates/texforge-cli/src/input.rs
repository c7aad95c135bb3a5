//! Loading texture specs from disk.
//!
//! Specs are JSON files. Loading also records a BLAKE3 hash of the raw file
//! content so reports can identify exactly which source produced an output.

use std::path::{Path, PathBuf};

use texforge_spec::TextureSpec;

/// Recognized spec extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Result of loading a spec.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed spec.
    pub spec: TextureSpec,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur during spec loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl InputError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        use crate::commands::json_output::error_codes;
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a spec from a `.json` file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use texforge_cli::input::load_spec;
///
/// let result = load_spec(Path::new("panel.json")).unwrap();
/// println!("Loaded {} ({})", result.spec.name, &result.source_hash[..16]);
/// ```
pub fn load_spec(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let spec = TextureSpec::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult { spec, source_hash })
}
