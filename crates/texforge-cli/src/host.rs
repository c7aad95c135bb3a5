//! Host capability interface.
//!
//! A host owns everything around synthesis: reading the user's controls,
//! showing a preview, and choosing where to save. The command-line host in
//! this module is one implementation; tests use in-memory hosts.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use texforge_backend::{encode_png_with_hash, PixelBuffer, PngConfig, PreviewSession};
use texforge_spec::{
    validate_fill, Dimensions, ErrorCode, FillSpec, TextureSpec, ValidationError,
    ValidationResult, MAX_TEXTURE_EDGE,
};

use crate::terminal;

/// What the host asks to be synthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRequest {
    pub dims: Dimensions,
    pub fill: FillSpec,
}

impl TextureRequest {
    /// The request a spec describes.
    pub fn from_spec(spec: &TextureSpec) -> Self {
        Self {
            dims: spec.dimensions(),
            fill: spec.fill.clone(),
        }
    }

    /// Check the fill rules and the maximum edge. Spec-level checks (name,
    /// output path) do not apply to a request.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        if self.dims.width() > MAX_TEXTURE_EDGE || self.dims.height() > MAX_TEXTURE_EDGE {
            result.add_error(ValidationError::with_path(
                ErrorCode::SizeTooLarge,
                format!(
                    "size {} exceeds the maximum edge of {}",
                    self.dims, MAX_TEXTURE_EDGE
                ),
                "size",
            ));
        }
        result.merge(validate_fill(&self.fill, self.dims));
        result
    }
}

/// Capabilities a presentation layer provides.
pub trait TextureHost {
    /// Read the current controls.
    fn render_controls(&mut self) -> Result<TextureRequest>;

    /// Display a synthesized buffer.
    fn preview_buffer(&mut self, buffer: &PixelBuffer) -> Result<()>;

    /// Ask where to save. `None` means the user cancelled.
    fn request_save_path(&mut self) -> Result<Option<PathBuf>>;
}

/// A texture written by [`save_texture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedTexture {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
    /// Size of the PNG file.
    pub bytes: usize,
}

/// Synthesize the host's current request into the preview session and show it.
pub fn show_sample<H: TextureHost + ?Sized>(host: &mut H, session: &mut PreviewSession) -> Result<()> {
    let request = host.render_controls()?;
    let buffer = session.show_sample(request.dims, &request.fill);
    host.preview_buffer(buffer)
}

/// Ask for a save path and, unless cancelled, synthesize, encode, and write.
pub fn save_texture<H: TextureHost + ?Sized>(
    host: &mut H,
    config: &PngConfig,
) -> Result<Option<SavedTexture>> {
    let Some(path) = host.request_save_path()? else {
        return Ok(None);
    };

    let request = host.render_controls()?;
    let buffer = texforge_backend::synthesize(request.dims, &request.fill);
    let (data, hash) = encode_png_with_hash(&buffer, config).context("Failed to encode PNG")?;

    write_file(&path, &data)?;

    Ok(Some(SavedTexture {
        path,
        width: buffer.width(),
        height: buffer.height(),
        hash,
        bytes: data.len(),
    }))
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, data)
        .with_context(|| format!("Failed to write texture: {}", path.display()))
}

/// Command-line host: a fixed request, an optional save path, and a terminal
/// for previews.
pub struct CliHost<W: Write> {
    request: TextureRequest,
    save_path: Option<PathBuf>,
    out: W,
    max_width: u32,
}

impl<W: Write> CliHost<W> {
    /// Create a host. A `None` save path behaves like a dismissed save dialog.
    pub fn new(request: TextureRequest, save_path: Option<PathBuf>, out: W) -> Self {
        Self {
            request,
            save_path,
            out,
            max_width: terminal::DEFAULT_MAX_WIDTH,
        }
    }

    /// Limit preview width in terminal columns.
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Consume the host, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> TextureHost for CliHost<W> {
    fn render_controls(&mut self) -> Result<TextureRequest> {
        Ok(self.request.clone())
    }

    fn preview_buffer(&mut self, buffer: &PixelBuffer) -> Result<()> {
        let rendered = terminal::render_half_blocks(buffer, self.max_width);
        self.out
            .write_all(rendered.as_bytes())
            .context("Failed to write preview")?;
        self.out.flush().context("Failed to write preview")
    }

    fn request_save_path(&mut self) -> Result<Option<PathBuf>> {
        Ok(self.save_path.clone())
    }
}
