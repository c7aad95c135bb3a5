//! Terminal preview rendering.
//!
//! Each character cell shows two pixel rows using the upper half block: the
//! foreground paints the upper row, the background the lower one. Colors are
//! always written as 24-bit SGR sequences, whatever `COLORTERM` says.

use std::fmt::Write as _;

use texforge_backend::PixelBuffer;
use texforge_spec::{Dimensions, Rgb};

/// Default preview width in columns.
pub const DEFAULT_MAX_WIDTH: u32 = 64;

const UPPER_HALF: &str = "\u{2580}";
const RESET: &str = "\x1b[0m";

fn push_cell(out: &mut String, top: Rgb, bottom: Option<Rgb>) {
    let _ = write!(out, "\x1b[38;2;{};{};{}m", top.r, top.g, top.b);
    if let Some(bottom) = bottom {
        let _ = write!(out, "\x1b[48;2;{};{};{}m", bottom.r, bottom.g, bottom.b);
    }
    out.push_str(UPPER_HALF);
    out.push_str(RESET);
}

/// Dimensions a buffer is shown at: unchanged if it fits in `max_width`
/// columns, otherwise scaled down keeping the aspect ratio.
pub fn preview_dimensions(dims: Dimensions, max_width: u32) -> Dimensions {
    let max_width = max_width.max(1);
    if dims.width() <= max_width {
        return dims;
    }
    let scale = max_width as f64 / dims.width() as f64;
    let height = (dims.height() as f64 * scale).round() as u32;
    Dimensions::new(max_width, height)
}

/// Render a buffer as lines of colored half blocks, top row first.
pub fn render_half_blocks(buffer: &PixelBuffer, max_width: u32) -> String {
    let target = preview_dimensions(buffer.dimensions(), max_width);
    let scaled;
    let buffer = if target == buffer.dimensions() {
        buffer
    } else {
        scaled = buffer.resample_nearest(target);
        &scaled
    };

    let rows: Vec<&[Rgb]> = buffer.rows_top_down().collect();
    let mut out = String::new();

    for pair in rows.chunks(2) {
        let upper = pair[0];
        match pair.get(1) {
            Some(lower) => {
                for (top, bottom) in upper.iter().zip(lower.iter()) {
                    push_cell(&mut out, *top, Some(*bottom));
                }
            }
            None => {
                for top in upper {
                    push_cell(&mut out, *top, None);
                }
            }
        }
        out.push('\n');
    }

    out
}
