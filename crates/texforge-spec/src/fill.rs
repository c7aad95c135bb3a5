//! Fill specifications: the per-pixel color rule of a texture.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// How a texture is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", deny_unknown_fields)]
pub enum FillSpec {
    /// Every pixel is `color`.
    Solid { color: Rgb },

    /// Interior is `fill_color`; a border band `outline_thickness` pixels
    /// wide is `outline_color`.
    Outlined {
        fill_color: Rgb,
        outline_color: Rgb,
        #[serde(default)]
        outline_thickness: u32,
    },

    /// Piecewise-linear color ramp along one axis.
    Gradient {
        #[serde(default)]
        axis: GradientAxis,
        #[serde(default = "default_stops")]
        stops: Vec<GradientStop>,
        #[serde(default)]
        blend: GradientMode,
    },
}

fn default_stops() -> Vec<GradientStop> {
    GradientStop::default_ramp()
}

impl FillSpec {
    /// Solid fill.
    pub fn solid(color: Rgb) -> Self {
        FillSpec::Solid { color }
    }

    /// Outlined fill.
    pub fn outlined(fill_color: Rgb, outline_color: Rgb, outline_thickness: u32) -> Self {
        FillSpec::Outlined {
            fill_color,
            outline_color,
            outline_thickness,
        }
    }

    /// Blended gradient along `axis`.
    pub fn gradient(axis: GradientAxis, stops: Vec<GradientStop>) -> Self {
        FillSpec::Gradient {
            axis,
            stops,
            blend: GradientMode::Blend,
        }
    }

    /// The fill mode of this spec.
    pub fn mode(&self) -> FillMode {
        match self {
            FillSpec::Solid { .. } => FillMode::Solid,
            FillSpec::Outlined { .. } => FillMode::Outlined,
            FillSpec::Gradient { .. } => FillMode::Gradient,
        }
    }

    /// The default fill for a mode: white everywhere, zero-thickness outline,
    /// white-to-white horizontal gradient.
    pub fn default_for(mode: FillMode) -> Self {
        match mode {
            FillMode::Solid => FillSpec::solid(Rgb::WHITE),
            FillMode::Outlined => FillSpec::outlined(Rgb::WHITE, Rgb::WHITE, 0),
            FillMode::Gradient => FillSpec::Gradient {
                axis: GradientAxis::default(),
                stops: default_stops(),
                blend: GradientMode::default(),
            },
        }
    }
}

impl Default for FillSpec {
    fn default() -> Self {
        Self::default_for(FillMode::Solid)
    }
}

/// Discriminant of [`FillSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    Solid,
    Outlined,
    Gradient,
}

impl FillMode {
    /// All fill modes, in menu order.
    pub const ALL: [FillMode; 3] = [FillMode::Solid, FillMode::Outlined, FillMode::Gradient];

    /// Returns the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Solid => "solid",
            FillMode::Outlined => "outlined",
            FillMode::Gradient => "gradient",
        }
    }

    /// Parses a mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Axis a gradient runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientAxis {
    /// Left (t = 0) to right (t = 1).
    #[default]
    Horizontal,
    /// Top row (t = 0) to bottom row (t = 1).
    Vertical,
}

impl GradientAxis {
    /// Returns the axis as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientAxis::Horizontal => "horizontal",
            GradientAxis::Vertical => "vertical",
        }
    }

    /// Parses an axis name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(GradientAxis::Horizontal),
            "vertical" => Some(GradientAxis::Vertical),
            _ => None,
        }
    }
}

/// How colors between stops are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    /// Linear interpolation between the bracketing stops.
    #[default]
    Blend,
    /// Step function: the color of the first stop at or after t.
    Fixed,
}

impl GradientMode {
    /// Returns the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientMode::Blend => "blend",
            GradientMode::Fixed => "fixed",
        }
    }

    /// Parses a blend mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blend" => Some(GradientMode::Blend),
            "fixed" => Some(GradientMode::Fixed),
            _ => None,
        }
    }
}

/// A (position, color) pair on a gradient ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientStop {
    /// Position along the ramp in [0, 1].
    pub position: f64,
    pub color: Rgb,
}

impl GradientStop {
    pub const fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }

    /// White to white, the ramp a new gradient starts with.
    pub fn default_ramp() -> Vec<Self> {
        vec![Self::new(0.0, Rgb::WHITE), Self::new(1.0, Rgb::WHITE)]
    }
}
