//! Gradient ramp evaluation.

use texforge_spec::{Dimensions, GradientAxis, GradientMode, GradientStop, Rgb};

/// A gradient ready for sampling: stops sorted by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<GradientStop>,
    mode: GradientMode,
}

impl ColorRamp {
    /// Build a ramp from stops in any order. Stops with equal positions
    /// keep their authored order.
    pub fn new(stops: &[GradientStop], mode: GradientMode) -> Self {
        let mut stops = stops.to_vec();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops, mode }
    }

    /// Sorted stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at `t`.
    ///
    /// Before the first stop or after the last, the nearest stop's color.
    /// A ramp without stops evaluates to black.
    pub fn evaluate(&self, t: f64) -> Rgb {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgb::BLACK;
        };

        match self.mode {
            GradientMode::Blend => {
                if t <= first.position {
                    return first.color;
                }
                if t >= last.position {
                    return last.color;
                }
                // first.position < t < last.position, so some window brackets t
                // with a non-zero span.
                self.stops
                    .windows(2)
                    .find(|w| t < w[1].position)
                    .map(|w| {
                        let (s0, s1) = (w[0], w[1]);
                        let f = (t - s0.position) / (s1.position - s0.position);
                        s0.color.lerp(&s1.color, f)
                    })
                    .unwrap_or(last.color)
            }
            GradientMode::Fixed => self
                .stops
                .iter()
                .find(|s| s.position >= t)
                .unwrap_or(last)
                .color,
        }
    }
}

/// Normalized gradient position of pixel (x, y).
///
/// Horizontal runs left to right. Vertical runs from the top row (t = 0) to
/// the bottom row (t = 1), with y counted from the bottom. A one-pixel axis
/// always yields 0.
pub fn axis_position(axis: GradientAxis, x: u32, y: u32, dims: Dimensions) -> f64 {
    match axis {
        GradientAxis::Horizontal => inverse_lerp(0, dims.width() - 1, x),
        GradientAxis::Vertical => {
            let top = dims.height() - 1;
            inverse_lerp(0, top, top - y)
        }
    }
}

/// Position of `v` between `a` and `b` in [0, 1]; 0 when `a == b`.
fn inverse_lerp(a: u32, b: u32, v: u32) -> f64 {
    if a == b {
        return 0.0;
    }
    ((v as f64 - a as f64) / (b as f64 - a as f64)).clamp(0.0, 1.0)
}
