//! Main spec types.

use serde::{Deserialize, Serialize};

use crate::fill::FillSpec;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Texture size in pixels. Both edges are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create dimensions, clamping a zero edge to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Square dimensions.
    pub fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl From<[u32; 2]> for Dimensions {
    fn from(size: [u32; 2]) -> Self {
        Self::new(size[0], size[1])
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A texture spec document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureSpec {
    /// Spec format version.
    pub spec_version: u32,
    /// Texture name; also the default output file stem.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Texture size as authored, [width, height]. Zero edges clamp to 1.
    #[serde(default = "default_size")]
    pub size: [u32; 2],
    /// Fill rule.
    pub fill: FillSpec,
    /// Relative output path of the PNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn default_size() -> [u32; 2] {
    [1, 1]
}

impl TextureSpec {
    /// Creates a builder for a spec.
    pub fn builder(name: impl Into<String>, fill: FillSpec) -> TextureSpecBuilder {
        TextureSpecBuilder::new(name, fill)
    }

    /// Effective dimensions after clamping.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from(self.size)
    }

    /// The output path, defaulting to `<name>.png`.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.png", self.name))
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the spec to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Builder for [`TextureSpec`].
#[derive(Debug, Clone)]
pub struct TextureSpecBuilder {
    spec: TextureSpec,
}

impl TextureSpecBuilder {
    /// Creates a new builder with a 1x1 size.
    pub fn new(name: impl Into<String>, fill: FillSpec) -> Self {
        Self {
            spec: TextureSpec {
                spec_version: SPEC_VERSION,
                name: name.into(),
                description: None,
                size: default_size(),
                fill,
                output: None,
            },
        }
    }

    /// Sets the size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.spec.size = [width, height];
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = Some(description.into());
        self
    }

    /// Sets the output path.
    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.spec.output = Some(path.into());
        self
    }

    /// Builds the spec.
    pub fn build(self) -> TextureSpec {
        self.spec
    }
}
