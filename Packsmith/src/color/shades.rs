//! Gradient anchors derived from a single material color

use super::Rgb;

/// Highlight multiplier applied to the base color.
const BRIGHT_FACTOR: f64 = 1.7;
/// Shadow multiplier applied to the base color.
const DARK_FACTOR: f64 = 0.35;
/// Fraction of the dark shade used for the near-black outline edge.
const EDGE_FACTOR: f64 = 0.15;

/// Bright, medium and dark anchors of a three-point gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shades {
    pub bright: Rgb,
    pub medium: Rgb,
    pub dark: Rgb,
}

impl Shades {
    /// Derive anchors from a base color: the base is the medium shade,
    /// bright is `base * 1.7` and dark is `base * 0.35`, truncated and
    /// clamped to the channel range.
    #[must_use]
    pub fn from_base(base: Rgb) -> Self {
        Self {
            bright: scale(base, BRIGHT_FACTOR),
            medium: base,
            dark: scale(base, DARK_FACTOR),
        }
    }

    /// Near-black edge color the darkest band starts from.
    #[must_use]
    pub fn edge(&self) -> Rgb {
        scale(self.dark, EDGE_FACTOR)
    }
}

fn scale(color: Rgb, factor: f64) -> Rgb {
    let channel = |c: u8| (f64::from(c) * factor).clamp(0.0, 255.0) as u8;
    Rgb::new(channel(color.r), channel(color.g), channel(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base() {
        let shades = Shades::from_base(Rgb::new(96, 60, 32));
        assert_eq!(shades.medium, Rgb::new(96, 60, 32));
        // 96 * 1.7 = 163.2, 60 * 1.7 = 102, 32 * 1.7 = 54.4
        assert_eq!(shades.bright, Rgb::new(163, 102, 54));
        // 96 * 0.35 = 33.6, 60 * 0.35 = 21, 32 * 0.35 = 11.2
        assert_eq!(shades.dark, Rgb::new(33, 21, 11));
    }

    #[test]
    fn test_bright_clamps() {
        let shades = Shades::from_base(Rgb::new(200, 150, 0));
        assert_eq!(shades.bright, Rgb::new(255, 255, 0));
    }

    #[test]
    fn test_edge() {
        let shades = Shades::from_base(Rgb::new(134, 96, 67));
        // dark = (46, 33, 23); edge = trunc(dark * 0.15)
        assert_eq!(shades.dark, Rgb::new(46, 33, 23));
        assert_eq!(shades.edge(), Rgb::new(6, 4, 3));
    }
}
