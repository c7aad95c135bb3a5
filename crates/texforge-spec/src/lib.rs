//! texforge Texture Spec Library
//!
//! This crate provides types, validation, and hashing for texforge texture
//! specs. A spec is a JSON document describing one procedural texture: its
//! size, its fill rule, and where the PNG should be written.
//!
//! # Overview
//!
//! - **Size**: `[width, height]`, each edge clamped to at least 1
//! - **Fill**: one of `solid`, `outlined`, or `gradient` (see [`FillSpec`])
//! - **Output**: a relative `.png` path, defaulting to `<name>.png`
//!
//! # Example
//!
//! ```
//! use texforge_spec::{FillSpec, GradientAxis, GradientStop, Rgb, TextureSpec};
//! use texforge_spec::validation::validate_spec;
//! use texforge_spec::hash::canonical_spec_hash;
//!
//! let spec = TextureSpec::builder(
//!     "sky-ramp",
//!     FillSpec::gradient(
//!         GradientAxis::Vertical,
//!         vec![
//!             GradientStop::new(0.0, Rgb::new(20, 40, 120)),
//!             GradientStop::new(1.0, Rgb::new(180, 210, 255)),
//!         ],
//!     ),
//! )
//! .size(1, 256)
//! .description("Vertical sky gradient")
//! .output("textures/sky.png")
//! .build();
//!
//! let result = validate_spec(&spec);
//! assert!(result.is_ok());
//!
//! let hash = canonical_spec_hash(&spec).unwrap();
//! println!("Spec hash: {}", hash);
//! ```

pub mod color;
pub mod error;
pub mod fill;
pub mod hash;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use color::{ColorParseError, Rgb};
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use fill::{FillMode, FillSpec, GradientAxis, GradientMode, GradientStop};
pub use hash::{canonical_content_hash, canonical_spec_hash};
pub use spec::{Dimensions, TextureSpec, TextureSpecBuilder, SPEC_VERSION};
pub use validation::{
    has_png_extension, is_safe_output_path, is_valid_name, validate_fill, validate_spec, MAX_TEXTURE_EDGE,
};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_parse_gradient_example() {
        let json = r##"{
            "spec_version": 1,
            "name": "sunset-ramp",
            "description": "Three-stop horizontal sunset",
            "size": [256, 4],
            "fill": {
                "mode": "gradient",
                "axis": "horizontal",
                "stops": [
                    { "position": 0.0, "color": "#1a0533" },
                    { "position": 0.5, "color": "#ff5e3a" },
                    { "position": 1.0, "color": "#ffd56b" }
                ]
            },
            "output": "textures/sunset.png"
        }"##;

        let spec = TextureSpec::from_json(json).expect("should parse");
        assert_eq!(spec.name, "sunset-ramp");
        assert_eq!(spec.dimensions(), Dimensions::new(256, 4));
        assert_eq!(spec.fill.mode(), FillMode::Gradient);

        let result = validate_spec(&spec);
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
    }

    #[test]
    fn test_validation_error_messages() {
        let spec = TextureSpec::builder("INVALID", FillSpec::default())
            .description("bad name")
            .build();

        let result = validate_spec(&spec);
        assert!(!result.is_ok());

        let error = result
            .errors
            .iter()
            .find(|e| e.code == ErrorCode::InvalidName);
        assert!(error.is_some());
        assert!(error.unwrap().message.contains("name"));
    }
}
