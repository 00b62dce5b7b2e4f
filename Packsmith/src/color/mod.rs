//! Color primitives
//!
//! [`Rgb`] triples with hex/decimal conversion, plus [`Shades`], the
//! bright/medium/dark gradient anchors derived from a single base color.

mod shades;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use shades::Shades;

/// An opaque 8-bit RGB color.
///
/// Deserializes from either a `[r, g, b]` array or a `"#RRGGBB"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "RgbRepr", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mean of the three channels, `(r + g + b) / 3`, in `0.0..=255.0`.
    #[must_use]
    pub fn brightness(self) -> f32 {
        mean_brightness(self.r, self.g, self.b)
    }

    /// Format as an uppercase `#RRGGBB` code.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(format!(
                "'{hex}' is not a #RRGGBB color"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidColor(format!("'{hex}' has invalid hex digits")))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Decompose a packed decimal color (`0xRRGGBB`) into channels.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_decimal(decimal: u64) -> Self {
        Self::new(
            ((decimal >> 16) & 0xFF) as u8,
            ((decimal >> 8) & 0xFF) as u8,
            (decimal & 0xFF) as u8,
        )
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({} {} {})", self.r, self.g, self.b)
    }
}

/// Accepted config spellings of a color.
#[derive(Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Array([u8; 3]),
    Hex(String),
}

impl TryFrom<RgbRepr> for Rgb {
    type Error = Error;

    fn try_from(repr: RgbRepr) -> Result<Self> {
        match repr {
            RgbRepr::Array(channels) => Ok(channels.into()),
            RgbRepr::Hex(hex) => Self::from_hex(&hex),
        }
    }
}

/// Mean channel brightness in `0.0..=255.0`.
#[must_use]
pub fn mean_brightness(r: u8, g: u8, b: u8) -> f32 {
    (f32::from(r) + f32::from(g) + f32::from(b)) / 3.0
}

/// Parse a decimal color argument such as `"6306848"`.
///
/// Negative and non-integer input is rejected.
pub fn parse_decimal(input: &str) -> Result<Rgb> {
    input
        .trim()
        .parse::<u64>()
        .map(Rgb::from_decimal)
        .map_err(|_| Error::InvalidColor(format!("'{input}' is not a valid number")))
}
