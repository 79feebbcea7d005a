use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Classic,
    Spectrum,
    Fire,
    Ocean,
    Forest,
    Monochrome,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "spectrum" => Ok(Self::Spectrum),
            "fire" => Ok(Self::Fire),
            "ocean" => Ok(Self::Ocean),
            "forest" => Ok(Self::Forest),
            "mono" | "monochrome" => Ok(Self::Monochrome),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

/// Colors for each element of the sector plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPalette {
    pub outline: (u8, u8, u8),
    pub wedge: (u8, u8, u8),
    pub arc: (u8, u8, u8),
    pub radius: (u8, u8, u8),
    pub diameter: (u8, u8, u8),
}

impl ColorScheme {
    /// Get color for a given position (0.0 to 1.0) and intensity (0.0 to 1.0)
    pub fn get_color(&self, position: f32, intensity: f32) -> (u8, u8, u8) {
        let (h, s, l) = match self {
            ColorScheme::Classic | ColorScheme::Spectrum => {
                // purple -> blue -> cyan -> green -> yellow -> red
                let hue = 270.0 - (position * 270.0);
                (hue, 0.9, 0.4 + intensity * 0.3)
            }
            ColorScheme::Fire => {
                let hue = position * 60.0;
                (hue, 0.95, 0.3 + intensity * 0.4)
            }
            ColorScheme::Ocean => {
                let hue = 180.0 + position * 60.0;
                (hue, 0.8, 0.3 + intensity * 0.35)
            }
            ColorScheme::Forest => {
                let hue = 80.0 + position * 60.0;
                (hue, 0.75, 0.25 + intensity * 0.35)
            }
            ColorScheme::Monochrome => (0.0, 0.0, intensity * 0.8),
        };

        let hsl = Hsl::new(h, s, l);
        let rgb: Srgb = hsl.into_color();

        (
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }

    pub fn palette(&self) -> PlotPalette {
        match self {
            // light blue wedge, blue arc, green radii, red diameter
            ColorScheme::Classic => PlotPalette {
                outline: (230, 230, 230),
                wedge: (173, 216, 230),
                arc: (40, 90, 255),
                radius: (0, 170, 0),
                diameter: (220, 40, 40),
            },
            _ => PlotPalette {
                outline: self.get_color(0.0, 1.0),
                wedge: self.get_color(0.35, 0.6),
                arc: self.get_color(0.5, 1.0),
                radius: self.get_color(0.75, 0.8),
                diameter: self.get_color(1.0, 0.7),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "Classic",
            ColorScheme::Spectrum => "Spectrum",
            ColorScheme::Fire => "Fire",
            ColorScheme::Ocean => "Ocean",
            ColorScheme::Forest => "Forest",
            ColorScheme::Monochrome => "Monochrome",
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Classic,
            ColorScheme::Spectrum,
            ColorScheme::Fire,
            ColorScheme::Ocean,
            ColorScheme::Forest,
            ColorScheme::Monochrome,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let current = all.iter().position(|c| c == self).unwrap_or(0);
        all[(current + 1) % all.len()]
    }
}
