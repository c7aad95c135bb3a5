//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same pixel buffer always encodes
//! to byte-identical output.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Config optimized for file size.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Config optimized for speed.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }

    /// Looks up a config by name (`default`, `best`, `fast`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "best" => Some(Self::best_compression()),
            "fast" => Some(Self::fast()),
            _ => None,
        }
    }
}

/// Encode a buffer as an 8-bit RGB PNG into any writer.
///
/// Rows are written top-down, so the buffer's bottom-left origin ends up at
/// the bottom-left of the displayed image.
pub fn write_rgb_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgb8_top_down())?;
    png_writer.finish()?;

    Ok(())
}

/// Encode a buffer to PNG bytes.
pub fn encode_png(buffer: &PixelBuffer, config: &PngConfig) -> Result<Vec<u8>, PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(buffer, &mut data, config)?;
    Ok(data)
}

/// Write a buffer to a PNG file.
pub fn write_png(buffer: &PixelBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgb_to_writer(buffer, writer, config)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to PNG bytes and return them with their hash.
pub fn encode_png_with_hash(
    buffer: &PixelBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let data = encode_png(buffer, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::synthesize;
    use texforge_spec::{Dimensions, FillSpec, GradientAxis, GradientStop, Rgb};

    fn make_gradient() -> PixelBuffer {
        synthesize(
            Dimensions::new(64, 32),
            &FillSpec::gradient(
                GradientAxis::Horizontal,
                vec![
                    GradientStop::new(0.0, Rgb::new(10, 20, 30)),
                    GradientStop::new(1.0, Rgb::new(200, 100, 50)),
                ],
            ),
        )
    }

    #[test]
    fn test_rgb_deterministic() {
        let buffer = make_gradient();
        let config = PngConfig::default();

        let (data1, hash1) = encode_png_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = encode_png_with_hash(&buffer, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_png_signature() {
        let data = encode_png(&make_gradient(), &PngConfig::fast()).unwrap();
        assert_eq!(&data[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_config_by_name() {
        assert!(PngConfig::by_name("default").is_some());
        assert!(PngConfig::by_name("best").is_some());
        assert!(PngConfig::by_name("fast").is_some());
        assert!(PngConfig::by_name("lossy").is_none());
    }
}
