//! Inline fill controls: the command-line counterpart of the texture editor
//! fields (mode, size, colors, outline, gradient).

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use texforge_spec::{
    Dimensions, FillMode, FillSpec, GradientAxis, GradientMode, GradientStop, Rgb,
};

use crate::host::TextureRequest;

/// Fill parameters given directly on the command line.
#[derive(Debug, Clone, Args)]
pub struct FillControls {
    /// Fill mode
    #[arg(long, default_value = "solid", value_parser = ["solid", "outlined", "gradient"])]
    pub mode: String,

    /// Texture size as WIDTHxHEIGHT (or a single edge for a square)
    #[arg(long, default_value = "1x1")]
    pub size: String,

    /// Fill color (#rrggbb) for solid and outlined modes
    #[arg(long)]
    pub color: Option<String>,

    /// Outline color (#rrggbb) for outlined mode
    #[arg(long)]
    pub outline_color: Option<String>,

    /// Outline thickness in pixels for outlined mode
    #[arg(long, default_value_t = 0)]
    pub outline_thickness: u32,

    /// Gradient axis
    #[arg(long, default_value = "horizontal", value_parser = ["horizontal", "vertical"])]
    pub axis: String,

    /// Gradient stop as POSITION:COLOR (repeatable), e.g. --stop 0:#000000 --stop 1:#ffffff
    #[arg(long = "stop")]
    pub stops: Vec<String>,

    /// Gradient blending between stops
    #[arg(long, default_value = "blend", value_parser = ["blend", "fixed"])]
    pub blend: String,
}

impl Default for FillControls {
    fn default() -> Self {
        Self {
            mode: "solid".to_string(),
            size: "1x1".to_string(),
            color: None,
            outline_color: None,
            outline_thickness: 0,
            axis: "horizontal".to_string(),
            stops: Vec::new(),
            blend: "blend".to_string(),
        }
    }
}

impl FillControls {
    /// Read the controls into a texture request.
    pub fn to_request(&self) -> Result<TextureRequest> {
        let mode = FillMode::from_name(&self.mode)
            .ok_or_else(|| anyhow!("unknown fill mode: {}", self.mode))?;
        let dims = parse_size(&self.size)?;

        let fill = match mode {
            FillMode::Solid => FillSpec::solid(parse_color_opt(self.color.as_deref(), "color")?),
            FillMode::Outlined => FillSpec::outlined(
                parse_color_opt(self.color.as_deref(), "color")?,
                parse_color_opt(self.outline_color.as_deref(), "outline-color")?,
                self.outline_thickness,
            ),
            FillMode::Gradient => {
                let axis = GradientAxis::from_name(&self.axis)
                    .ok_or_else(|| anyhow!("unknown gradient axis: {}", self.axis))?;
                let blend = GradientMode::from_name(&self.blend)
                    .ok_or_else(|| anyhow!("unknown gradient blend: {}", self.blend))?;

                let stops = if self.stops.is_empty() {
                    GradientStop::default_ramp()
                } else {
                    self.stops
                        .iter()
                        .map(|s| parse_stop(s))
                        .collect::<Result<Vec<_>>>()?
                };
                FillSpec::Gradient { axis, stops, blend }
            }
        };

        Ok(TextureRequest { dims, fill })
    }
}

/// Parse `WIDTHxHEIGHT` or a single edge. Zero edges clamp to 1.
pub fn parse_size(s: &str) -> Result<Dimensions> {
    let s = s.trim();
    let parse_edge = |edge: &str| {
        edge.trim()
            .parse::<u32>()
            .with_context(|| format!("invalid size '{}' (expected WIDTHxHEIGHT)", s))
    };

    match s.split_once(['x', 'X']) {
        Some((w, h)) => Ok(Dimensions::new(parse_edge(w)?, parse_edge(h)?)),
        None => Ok(Dimensions::square(parse_edge(s)?)),
    }
}

/// Parse `POSITION:COLOR`.
pub fn parse_stop(s: &str) -> Result<GradientStop> {
    let Some((position, color)) = s.split_once(':') else {
        bail!("invalid stop '{}' (expected POSITION:COLOR)", s);
    };

    let position: f64 = position
        .trim()
        .parse()
        .with_context(|| format!("invalid stop position in '{}'", s))?;
    let color =
        Rgb::from_hex(color).with_context(|| format!("invalid stop color in '{}'", s))?;

    Ok(GradientStop::new(position, color))
}

fn parse_color_opt(color: Option<&str>, flag: &str) -> Result<Rgb> {
    match color {
        Some(c) => Rgb::from_hex(c).with_context(|| format!("invalid --{} '{}'", flag, c)),
        None => Ok(Rgb::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64x32").unwrap(), Dimensions::new(64, 32));
        assert_eq!(parse_size("8X2").unwrap(), Dimensions::new(8, 2));
        assert_eq!(parse_size("16").unwrap(), Dimensions::new(16, 16));
        assert_eq!(parse_size("0x0").unwrap(), Dimensions::new(1, 1));
        assert!(parse_size("wide").is_err());
        assert!(parse_size("4x-1").is_err());
    }

    #[test]
    fn test_parse_stop() {
        assert_eq!(
            parse_stop("0.25:#ff0000").unwrap(),
            GradientStop::new(0.25, Rgb::RED)
        );
        assert!(parse_stop("0.25").is_err());
        assert!(parse_stop("half:#ff0000").is_err());
        assert!(parse_stop("0.5:red").is_err());
    }

    #[test]
    fn test_defaults_are_white_one_pixel() {
        let request = FillControls::default().to_request().unwrap();
        assert_eq!(request.dims, Dimensions::new(1, 1));
        assert_eq!(request.fill, FillSpec::solid(Rgb::WHITE));
    }

    #[test]
    fn test_outlined_controls() {
        let controls = FillControls {
            mode: "outlined".to_string(),
            size: "3x3".to_string(),
            color: Some("#ff0000".to_string()),
            outline_color: Some("#0000ff".to_string()),
            outline_thickness: 1,
            ..FillControls::default()
        };
        let request = controls.to_request().unwrap();
        assert_eq!(request.fill, FillSpec::outlined(Rgb::RED, Rgb::BLUE, 1));
    }

    #[test]
    fn test_gradient_controls() {
        let controls = FillControls {
            mode: "gradient".to_string(),
            axis: "vertical".to_string(),
            blend: "fixed".to_string(),
            stops: vec!["0:#000000".to_string(), "1:#ffffff".to_string()],
            ..FillControls::default()
        };
        let request = controls.to_request().unwrap();
        assert_eq!(
            request.fill,
            FillSpec::Gradient {
                axis: GradientAxis::Vertical,
                stops: vec![
                    GradientStop::new(0.0, Rgb::BLACK),
                    GradientStop::new(1.0, Rgb::WHITE),
                ],
                blend: GradientMode::Fixed,
            }
        );
    }

    #[test]
    fn test_gradient_without_stops_uses_default_ramp() {
        let controls = FillControls {
            mode: "gradient".to_string(),
            ..FillControls::default()
        };
        let request = controls.to_request().unwrap();
        assert_eq!(request.fill, FillSpec::default_for(FillMode::Gradient));
    }

    #[test]
    fn test_bad_color_is_reported() {
        let controls = FillControls {
            color: Some("#12345".to_string()),
            ..FillControls::default()
        };
        let err = controls.to_request().unwrap_err();
        assert!(format!("{:#}", err).contains("--color"));
    }
}
