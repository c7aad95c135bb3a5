//! texforge Texture Synthesis Backend
//!
//! This crate turns a size and a fill rule into pixels and PNG bytes. All
//! output is byte-identical given the same inputs.
//!
//! # Fill rules
//!
//! - **Solid**: every pixel one color
//! - **Outlined**: interior color inside a border band of configurable thickness
//! - **Gradient**: piecewise-linear (or stepped) color ramp along one axis
//!
//! # Example
//!
//! ```no_run
//! use texforge_backend::{generate_texture, save_texture_result, PngConfig};
//! use texforge_spec::{FillSpec, Rgb, TextureSpec};
//! use std::path::Path;
//!
//! let spec = TextureSpec::builder("panel", FillSpec::outlined(Rgb::WHITE, Rgb::BLACK, 2))
//!     .size(64, 32)
//!     .output("ui/panel.png")
//!     .build();
//!
//! let result = generate_texture(&spec, &PngConfig::default()).unwrap();
//! save_texture_result(&result, Path::new("output"), &spec.output_path()).unwrap();
//! ```
//!
//! # Coordinates
//!
//! [`PixelBuffer`] uses a bottom-left origin. The PNG writer emits rows top
//! down, so a buffer's row 0 becomes the last row of the file.

pub mod buffer;
pub mod generate;
pub mod gradient;
pub mod png;
pub mod preview;
pub mod synth;

// Re-export main types for convenience
pub use buffer::PixelBuffer;
pub use generate::{generate_texture, save_texture_result, GenerateError, TextureResult};
pub use gradient::{axis_position, ColorRamp};
pub use crate::png::{encode_png, encode_png_with_hash, hash_png, write_png, PngConfig, PngError};
pub use preview::PreviewSession;
pub use synth::{in_outline_band, synthesize};
