//! Opaque 8-bit RGB color.
//!
//! Colors are authored as `"#rrggbb"` hex strings (the leading `#` is
//! optional) or as `[r, g, b]` arrays, and always serialize back to hex.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0}")]
    BadLength(usize),

    #[error("invalid hex digit in '{0}'")]
    BadDigit(String),
}

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Parse `"#rrggbb"` or `"rrggbb"`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as lowercase `"#rrggbb"`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as a byte array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linearly interpolate towards `other`.
    ///
    /// Channels are interpolated in f64 and rounded half away from zero, so
    /// the midpoint of black and white is 128.
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

/// Accepted JSON forms of a color.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels([u8; 3]),
}

impl TryFrom<ColorRepr> for Rgb {
    type Error = ColorParseError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(s) => Rgb::from_hex(&s),
            ColorRepr::Channels(c) => Ok(Rgb::from(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("00FF7f").unwrap(), Rgb::new(0, 255, 127));
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert_eq!(Rgb::from_hex("#fff"), Err(ColorParseError::BadLength(3)));
        assert!(matches!(
            Rgb::from_hex("#gg0000"),
            Err(ColorParseError::BadDigit(_))
        ));
        assert!(Rgb::from_hex("#ééé").is_err());
        assert!(matches!(
            Rgb::from_hex("#+f+f+f"),
            Err(ColorParseError::BadDigit(_))
        ));
        assert!(matches!(
            Rgb::from_hex("#-1ff00"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(Rgb::new(1, 171, 255).to_hex(), "#01abff");
    }

    #[test]
    fn test_lerp_midpoint_rounds_up() {
        let mid = Rgb::BLACK.lerp(&Rgb::WHITE, 0.5);
        assert_eq!(mid, Rgb::gray(128));
    }

    #[test]
    fn test_lerp_clamps_t() {
        assert_eq!(Rgb::BLACK.lerp(&Rgb::WHITE, -1.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.lerp(&Rgb::WHITE, 2.0), Rgb::WHITE);
    }

    #[test]
    fn test_serde_accepts_both_forms() {
        let hex: Rgb = serde_json::from_str(r##""#102030""##).unwrap();
        let arr: Rgb = serde_json::from_str("[16, 32, 48]").unwrap();
        assert_eq!(hex, arr);
        assert_eq!(serde_json::to_string(&hex).unwrap(), r##""#102030""##);
    }

    #[test]
    fn test_serde_rejects_out_of_range_channel() {
        assert!(serde_json::from_str::<Rgb>("[0, 0, 256]").is_err());
    }
}
