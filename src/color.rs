use std::fmt;
use std::str::FromStr;

use egui::Color32;
use egui::ecolor::{HexColor, ParseHexColorError};

use crate::error::ColorParseError;

/// The color stored in a single bead.
///
/// `Empty` is the unpainted state. It is drawn black but never compares equal
/// to a bead that was explicitly painted black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellColor {
    #[default]
    Empty,
    Painted(Rgb),
}

impl CellColor {
    /// Color used to draw this bead on screen and in exports
    pub fn fill(self) -> Color32 {
        match self {
            CellColor::Empty => Color32::BLACK,
            CellColor::Painted(rgb) => rgb.into(),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, CellColor::Empty)
    }
}

impl From<Rgb> for CellColor {
    fn from(rgb: Rgb) -> Self {
        CellColor::Painted(rgb)
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellColor::Empty => f.write_str("empty"),
            CellColor::Painted(rgb) => rgb.fmt(f),
        }
    }
}

/// An opaque 8-bit RGB paint color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color32 {
    fn from(rgb: Rgb) -> Self {
        Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color32> for Rgb {
    /// Drops alpha; beads are always opaque.
    fn from(color: Color32) -> Self {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts `#rrggbb`, `#rgb` and the names `black` and `white`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Rgb::BLACK),
            "white" => return Ok(Rgb::WHITE),
            _ => {}
        }

        match HexColor::from_str(trimmed) {
            Ok(HexColor::Hex3(color) | HexColor::Hex6(color)) => Ok(color.into()),
            // Beads are opaque; forms carrying alpha are rejected
            Ok(HexColor::Hex4(_) | HexColor::Hex8(_)) | Err(ParseHexColorError::InvalidLength) => {
                Err(ColorParseError::InvalidLength(s.to_owned()))
            }
            Err(ParseHexColorError::MissingHash) => Err(ColorParseError::MissingHash(s.to_owned())),
            Err(ParseHexColorError::InvalidInt(_)) => Err(ColorParseError::InvalidDigit(s.to_owned())),
        }
    }
}
