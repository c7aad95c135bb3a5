//! Spec-level generation: synthesize, encode, and save.

use std::path::{Path, PathBuf};

use thiserror::Error;
use texforge_spec::{has_png_extension, is_safe_output_path, TextureSpec};

use crate::buffer::PixelBuffer;
use crate::png::{encode_png_with_hash, PngConfig, PngError};
use crate::synth::synthesize;

/// Errors from texture generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result of generating one texture.
#[derive(Debug)]
pub struct TextureResult {
    /// The synthesized pixels.
    pub buffer: PixelBuffer,
    /// Encoded PNG file contents.
    pub data: Vec<u8>,
    /// BLAKE3 hash of the PNG file.
    pub hash: String,
}

impl TextureResult {
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }
}

/// Synthesize and encode the texture a spec describes.
pub fn generate_texture(spec: &TextureSpec, config: &PngConfig) -> Result<TextureResult, GenerateError> {
    let buffer = synthesize(spec.dimensions(), &spec.fill);
    let (data, hash) = encode_png_with_hash(&buffer, config)?;
    Ok(TextureResult { buffer, data, hash })
}

/// Write a generated texture to `out_root/relative_path`, creating parent
/// directories. Returns the full path written.
pub fn save_texture_result(
    result: &TextureResult,
    out_root: &Path,
    relative_path: &str,
) -> Result<PathBuf, GenerateError> {
    if !is_safe_output_path(relative_path) {
        return Err(GenerateError::InvalidParameter(format!(
            "unsafe output path '{}'",
            relative_path
        )));
    }
    if !has_png_extension(relative_path) {
        return Err(GenerateError::InvalidParameter(format!(
            "output path '{}' must end in .png",
            relative_path
        )));
    }

    let path = out_root.join(relative_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &result.data)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use texforge_spec::{FillSpec, Rgb};

    fn make_spec() -> TextureSpec {
        TextureSpec::builder("panel", FillSpec::outlined(Rgb::WHITE, Rgb::BLACK, 1))
            .size(8, 4)
            .output("ui/panel.png")
            .build()
    }

    #[test]
    fn test_generate_texture() {
        let result = generate_texture(&make_spec(), &PngConfig::default()).unwrap();
        assert_eq!((result.width(), result.height()), (8, 4));
        assert_eq!(result.hash.len(), 64);
        assert!(!result.data.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let spec = make_spec();
        let a = generate_texture(&spec, &PngConfig::default()).unwrap();
        let b = generate_texture(&spec, &PngConfig::default()).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.buffer, b.buffer);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let spec = make_spec();
        let result = generate_texture(&spec, &PngConfig::default()).unwrap();

        let path = save_texture_result(&result, dir.path(), &spec.output_path()).unwrap();
        assert_eq!(path, dir.path().join("ui/panel.png"));
        assert_eq!(std::fs::read(&path).unwrap(), result.data);
    }

    #[test]
    fn test_save_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let result = generate_texture(&make_spec(), &PngConfig::default()).unwrap();
        let err = save_texture_result(&result, dir.path(), "../escape.png").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidParameter(_)));
    }

    #[test]
    fn test_save_rejects_non_png_extension() {
        let dir = tempfile::tempdir().unwrap();
        let result = generate_texture(&make_spec(), &PngConfig::default()).unwrap();
        let err = save_texture_result(&result, dir.path(), "ui/panel.jpg").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidParameter(_)));
        assert!(!dir.path().join("ui/panel.jpg").exists());

        let path = save_texture_result(&result, dir.path(), "ui/PANEL.PNG").unwrap();
        assert!(path.exists());
    }
}
