//! Pixel buffer produced by synthesis.

use texforge_spec::{Dimensions, Rgb};

/// A width x height grid of opaque RGB pixels.
///
/// Storage is row-major with the origin at the bottom-left: row 0 is the
/// bottom row of the texture as displayed. The public API is read-only; a
/// buffer never changes after synthesis hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dimensions,
    data: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to `fill`.
    pub(crate) fn filled(dims: Dimensions, fill: Rgb) -> Self {
        Self {
            dims,
            data: vec![fill; dims.pixel_count()],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.dims.width() as usize + x as usize
    }

    /// Set a pixel. Coordinates are bottom-left origin.
    #[inline]
    pub(crate) fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Get a pixel. Coordinates are bottom-left origin.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({}, {}) out of bounds for {} buffer",
            x,
            y,
            self.dims
        );
        self.data[self.index(x, y)]
    }

    /// All pixels, row-major from the bottom row up.
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// One row of pixels, left to right. Row 0 is the bottom row.
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = self.index(0, y);
        &self.data[start..start + self.width() as usize]
    }

    /// Rows in display order: the top row (highest y) first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        (0..self.height()).rev().map(move |y| self.row(y))
    }

    /// Packed 8-bit RGB bytes in display order (top row first), the layout
    /// image encoders expect.
    pub fn to_rgb8_top_down(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for row in self.rows_top_down() {
            for color in row {
                bytes.extend_from_slice(&color.to_array());
            }
        }
        bytes
    }

    /// Nearest-neighbour resample to `dims`.
    pub fn resample_nearest(&self, dims: Dimensions) -> PixelBuffer {
        let mut out = PixelBuffer::filled(dims, Rgb::BLACK);
        let sx = self.width() as f64 / dims.width() as f64;
        let sy = self.height() as f64 / dims.height() as f64;

        for y in 0..dims.height() {
            let src_y = ((y as f64 + 0.5) * sy) as u32;
            for x in 0..dims.width() {
                let src_x = ((x as f64 + 0.5) * sx) as u32;
                let color = self.get(
                    src_x.min(self.width() - 1),
                    src_y.min(self.height() - 1),
                );
                out.set(x, y, color);
            }
        }

        out
    }

    /// Returns true if every pixel equals `color`.
    pub fn is_uniform(&self, color: Rgb) -> bool {
        self.data.iter().all(|&c| c == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ramp() -> PixelBuffer {
        let mut buffer = PixelBuffer::filled(Dimensions::new(2, 3), Rgb::BLACK);
        for y in 0..3 {
            for x in 0..2 {
                buffer.set(x, y, Rgb::new(x as u8, y as u8, 0));
            }
        }
        buffer
    }

    #[test]
    fn test_row_major_bottom_up() {
        let buffer = make_ramp();
        assert_eq!(buffer.pixels()[0], Rgb::new(0, 0, 0));
        assert_eq!(buffer.pixels()[1], Rgb::new(1, 0, 0));
        assert_eq!(buffer.pixels()[2], Rgb::new(0, 1, 0));
        assert_eq!(buffer.row(2), &[Rgb::new(0, 2, 0), Rgb::new(1, 2, 0)]);
    }

    #[test]
    fn test_top_down_bytes_flip_rows() {
        let bytes = make_ramp().to_rgb8_top_down();
        assert_eq!(bytes.len(), 2 * 3 * 3);
        assert_eq!(&bytes[..6], &[0, 2, 0, 1, 2, 0]);
        assert_eq!(&bytes[12..], &[0, 0, 0, 1, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        make_ramp().get(2, 0);
    }

    #[test]
    fn test_resample_nearest() {
        let buffer = make_ramp();
        let same = buffer.resample_nearest(buffer.dimensions());
        assert_eq!(same, buffer);

        let shrunk = buffer.resample_nearest(Dimensions::new(1, 1));
        assert_eq!(shrunk.get(0, 0), Rgb::new(1, 1, 0));
    }

    #[test]
    fn test_is_uniform() {
        let buffer = PixelBuffer::filled(Dimensions::new(4, 4), Rgb::RED);
        assert!(buffer.is_uniform(Rgb::RED));
        assert!(!make_ramp().is_uniform(Rgb::BLACK));
    }
}
