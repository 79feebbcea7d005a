use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::color::ColorScheme;
use crate::geometry::ascii::{
    BLANK_CHAR, BOUNDARY_CHAR, DEFAULT_ASPECT_RATIO, DEFAULT_BAND, MAX_GRID_DIM,
};
use crate::geometry::{RasterSettings, DEFAULT_ANGLE_DEGREES};
use crate::input::AnglePolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub ascii: AsciiConfig,
    pub report: ReportConfig,
    pub plot: PlotConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Sector angle used when the angle prompt is left blank
    pub default_angle: f64,
    pub angle_policy: AnglePolicy,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_angle: DEFAULT_ANGLE_DEGREES,
            angle_policy: AnglePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AsciiConfig {
    pub enabled: bool,
    pub width: usize,
    pub height: usize,
    pub aspect_ratio: f64,
    pub band: f64,
    pub boundary_glyph: char,
    pub blank_glyph: char,
    /// Sampled cells shown by --explain
    pub trace_points: usize,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 41,
            height: 21,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            band: DEFAULT_BAND,
            boundary_glyph: BOUNDARY_CHAR,
            blank_glyph: BLANK_CHAR,
            trace_points: 3,
        }
    }
}

impl AsciiConfig {
    pub fn raster_settings(&self) -> RasterSettings {
        RasterSettings {
            aspect_ratio: self.aspect_ratio,
            band: self.band,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places for computed values
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub enabled: bool,
    pub color_scheme: ColorScheme,
    pub arc_samples: usize,
    /// Concentric rings used to fill the sector wedge
    pub wedge_rings: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color_scheme: ColorScheme::Classic,
            arc_samples: 100,
            wedge_rings: 24,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/circlecalc/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("circlecalc").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!(
                        "Failed to load config at {}: {:#}; using defaults",
                        path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, Self::generate_config_template())?;

        Ok(path)
    }

    pub fn validate(&self) -> Result<()> {
        let i = &self.input;
        if !i.default_angle.is_finite() {
            bail!("input.default_angle must be a finite number");
        }
        if i.angle_policy == AnglePolicy::Reject && !(0.0..=360.0).contains(&i.default_angle) {
            bail!(
                "input.default_angle {} is outside [0, 360] and would always be rejected",
                i.default_angle
            );
        }

        let a = &self.ascii;
        if a.width == 0 || a.height == 0 {
            bail!("ascii.width and ascii.height must be at least 1");
        }
        if a.width > MAX_GRID_DIM || a.height > MAX_GRID_DIM {
            bail!("ascii.width and ascii.height must be at most {}", MAX_GRID_DIM);
        }
        if !(a.aspect_ratio.is_finite() && a.aspect_ratio > 0.0) {
            bail!("ascii.aspect_ratio must be a positive number");
        }
        if !(a.band.is_finite() && a.band > 0.0) {
            bail!("ascii.band must be a positive number");
        }

        if self.report.precision > 15 {
            bail!("report.precision must be at most 15");
        }
        if self.plot.arc_samples < 2 {
            bail!("plot.arc_samples must be at least 2");
        }
        Ok(())
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# circlecalc configuration
# This file is auto-generated. Edit as needed.

[input]
# Sector angle used when the angle prompt is left blank
default_angle = 40.0
# Angles outside [0, 360]: "reject" (error) or "wrap" (reduce modulo 360)
angle_policy = "reject"

[ascii]
# Print the ASCII outline of the circle
enabled = true
# Grid size in characters (even sizes are rounded up to odd)
width = 41
height = 21
# Horizontal cells per row of equal visual length
aspect_ratio = 2.0
# Distance from the radius that still counts as the outline
band = 0.5
boundary_glyph = "*"
blank_glyph = " "
# Sampled cells shown with --explain
trace_points = 3

[report]
# Decimal places for computed values
precision = 4

[plot]
# Open the full-screen terminal plot
enabled = true
# Color scheme: "classic", "spectrum", "fire", "ocean", "forest", "monochrome"
color_scheme = "classic"
# Points along the sector arc
arc_samples = 100
# Concentric rings used to fill the sector wedge
wedge_rings = 24
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        if let Some(policy) = args.angle_policy {
            self.input.angle_policy = policy;
        }
        if let Some(precision) = args.precision {
            self.report.precision = precision;
        }
        if args.no_ascii {
            self.ascii.enabled = false;
        }
        if args.no_plot {
            self.plot.enabled = false;
        }
        if let Some(ref colors) = args.colors {
            match colors.parse() {
                Ok(scheme) => self.plot.color_scheme = scheme,
                Err(e) => warn!("{}; keeping {}", e, self.plot.color_scheme.name()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(&Config::generate_config_template()).unwrap();
        assert_eq!(config, Config::default());
        config.validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[input]
angle_policy = "wrap"

[plot]
color_scheme = "ocean"
"#,
        )
        .unwrap();
        assert_eq!(config.input.angle_policy, AnglePolicy::Wrap);
        assert_eq!(config.input.default_angle, 40.0);
        assert_eq!(config.plot.color_scheme, ColorScheme::Ocean);
        assert_eq!(config.ascii, AsciiConfig::default());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = Config::default();
        config.ascii.aspect_ratio = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ascii.width = 1 << 40;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ascii.height = MAX_GRID_DIM + 1;
        assert!(config.validate().is_err());
        config.ascii.height = MAX_GRID_DIM;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.input.default_angle = 400.0;
        assert!(config.validate().is_err());
        config.input.angle_policy = AnglePolicy::Wrap;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_color_name_keeps_the_configured_scheme() {
        use clap::Parser;

        let mut config = Config::default();
        config.plot.color_scheme = ColorScheme::Fire;
        config.merge_args(&crate::Args::parse_from(["circlecalc", "--colors", "plaid"]));
        assert_eq!(config.plot.color_scheme, ColorScheme::Fire);

        config.merge_args(&crate::Args::parse_from(["circlecalc", "--colors", "ocean"]));
        assert_eq!(config.plot.color_scheme, ColorScheme::Ocean);
    }

    #[test]
    fn load_reports_the_path_on_failure() {
        let dir = std::env::temp_dir().join("circlecalc-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[ascii]\nwidth = \"wide\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
