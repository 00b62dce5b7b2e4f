//! Palette extraction and brightness ranking

use std::collections::BTreeSet;
use std::str::FromStr;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::classify::is_blade;
use crate::color::Rgb;
use crate::error::Error;

/// Which opaque colors of a source image to keep.
///
/// In TOML: `"opaque"`, `"blade"`, or `{ min_brightness = 50.0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteFilter {
    /// Every opaque color.
    #[default]
    Opaque,
    /// Blade hues only (green and blue both exceed red).
    Blade,
    /// Colors whose mean brightness is strictly above the threshold.
    /// Used to drop near-black outline pixels.
    MinBrightness(f32),
}

impl PaletteFilter {
    #[must_use]
    pub fn accepts(&self, color: Rgb) -> bool {
        match *self {
            Self::Opaque => true,
            Self::Blade => is_blade(color.r, color.g, color.b),
            Self::MinBrightness(threshold) => color.brightness() > threshold,
        }
    }
}

/// Command-line spelling: `opaque`, `blade` or `min-brightness=N`.
impl FromStr for PaletteFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "opaque" => Ok(Self::Opaque),
            "blade" => Ok(Self::Blade),
            other => other
                .strip_prefix("min-brightness=")
                .and_then(|value| value.parse::<f32>().ok())
                .map(Self::MinBrightness)
                .ok_or_else(|| Error::ConfigInvalid {
                    message: format!(
                        "invalid filter '{s}'. Valid values: opaque, blade, min-brightness=N"
                    ),
                }),
        }
    }
}

/// A set of unique colors sorted ascending by mean brightness.
///
/// Colors of equal brightness are ordered by `(r, g, b)` so the ranking is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from arbitrary colors, dropping duplicates.
    pub fn new<I: IntoIterator<Item = Rgb>>(colors: I) -> Self {
        let unique: BTreeSet<Rgb> = colors.into_iter().collect();
        let mut colors: Vec<Rgb> = unique.into_iter().collect();
        // Stable sort keeps the (r, g, b) order inside equal sums
        colors.sort_by_key(|c| u16::from(c.r) + u16::from(c.g) + u16::from(c.b));
        Self { colors }
    }

    /// Extract the distinct opaque colors of `image` accepted by `filter`.
    #[must_use]
    pub fn extract(image: &RgbaImage, filter: PaletteFilter) -> Self {
        Self::extract_with(image, |color| filter.accepts(color))
    }

    /// Extract the distinct opaque colors of `image` accepted by `predicate`.
    pub fn extract_with<F>(image: &RgbaImage, predicate: F) -> Self
    where
        F: Fn(Rgb) -> bool,
    {
        let palette = Self::new(
            image
                .pixels()
                .filter(|p| p.0[3] > 0)
                .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
                .filter(|&color| predicate(color)),
        );
        tracing::debug!("Extracted {} palette colors", palette.len());
        palette
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Rank index for a normalized brightness: `round(norm * (len - 1))`,
    /// clamped to the palette. `None` for an empty palette.
    ///
    /// Halves round away from zero, so `norm = 0.5` on a two-color palette
    /// picks the brighter entry.
    #[must_use]
    pub fn rank_index(&self, norm: f32) -> Option<usize> {
        let last = self.colors.len().checked_sub(1)?;
        let scaled = (norm.clamp(0.0, 1.0) * last as f32).round();
        Some((scaled as usize).min(last))
    }

    /// The color at [`Palette::rank_index`].
    #[must_use]
    pub fn nearest_rank(&self, norm: f32) -> Option<Rgb> {
        self.rank_index(norm).map(|i| self.colors[i])
    }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self::new(iter)
    }
}
