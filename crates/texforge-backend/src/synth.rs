//! Texture synthesis: fill a pixel buffer from a [`FillSpec`].

use texforge_spec::{Dimensions, FillSpec, GradientAxis, Rgb};

use crate::buffer::PixelBuffer;
use crate::gradient::{axis_position, ColorRamp};

/// Synthesize a texture.
///
/// Pure and deterministic: the same dimensions and fill always produce an
/// identical buffer.
///
/// # Example
///
/// ```
/// use texforge_backend::synthesize;
/// use texforge_spec::{Dimensions, FillSpec, Rgb};
///
/// let buffer = synthesize(Dimensions::new(3, 3), &FillSpec::outlined(Rgb::RED, Rgb::BLUE, 1));
/// assert_eq!(buffer.get(1, 1), Rgb::RED);
/// assert_eq!(buffer.get(0, 0), Rgb::BLUE);
/// ```
pub fn synthesize(dims: Dimensions, fill: &FillSpec) -> PixelBuffer {
    match fill {
        FillSpec::Solid { color } => PixelBuffer::filled(dims, *color),
        FillSpec::Outlined {
            fill_color,
            outline_color,
            outline_thickness,
        } => outlined(dims, *fill_color, *outline_color, *outline_thickness),
        FillSpec::Gradient { axis, stops, blend } => {
            gradient(dims, *axis, &ColorRamp::new(stops, *blend))
        }
    }
}

/// Returns true if (x, y) lies in the outline band of a `dims` texture.
///
/// Interior pixels satisfy `thickness <= x < width - thickness` and the same
/// along y; everything else is band. A thickness of half the smaller edge or
/// more leaves no interior. Coordinates outside the texture count as band.
#[inline]
pub fn in_outline_band(x: u32, y: u32, dims: Dimensions, thickness: u32) -> bool {
    let interior = thickness <= x
        && dims.width().saturating_sub(x) > thickness
        && thickness <= y
        && dims.height().saturating_sub(y) > thickness;
    !interior
}

fn outlined(dims: Dimensions, fill_color: Rgb, outline_color: Rgb, thickness: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(dims, fill_color);

    for y in 0..dims.height() {
        for x in 0..dims.width() {
            if in_outline_band(x, y, dims, thickness) {
                buffer.set(x, y, outline_color);
            }
        }
    }

    buffer
}

fn gradient(dims: Dimensions, axis: GradientAxis, ramp: &ColorRamp) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(dims, Rgb::BLACK);

    for y in 0..dims.height() {
        for x in 0..dims.width() {
            let t = axis_position(axis, x, y, dims);
            buffer.set(x, y, ramp.evaluate(t));
        }
    }

    buffer
}
