//! Per-pixel region classification
//!
//! Regions are decided from a pixel's own channels only. There is no
//! neighbour or connectivity context, so anti-aliased edge pixels fall on
//! whichever side of the inequality their channels land.

use image::{Rgba, RgbaImage};

use crate::color::mean_brightness;

/// Handle pixels darker than this are treated as blade outline.
const HANDLE_MIN_BRIGHTNESS: f32 = 40.0;

/// A semantic area of a sword sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Cyan/aqua blade: blue and green both exceed red.
    Blade,
    /// Brown/tan handle: red exceeds blue and the pixel is not near-black.
    Handle,
}

impl Region {
    /// Lowercase name for messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blade => "blade",
            Self::Handle => "handle",
        }
    }

    /// Whether a pixel belongs to this region. Transparent pixels never do.
    #[must_use]
    pub fn contains(self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            return false;
        }

        match self {
            Self::Blade => is_blade(r, g, b),
            Self::Handle => r > b && mean_brightness(r, g, b) > HANDLE_MIN_BRIGHTNESS,
        }
    }

    /// Row-major membership mask for every pixel of `image`.
    #[must_use]
    pub fn mask(self, image: &RgbaImage) -> Vec<bool> {
        image.pixels().map(|p| self.contains(p)).collect()
    }
}

/// Blade hue test on bare channels (shared with palette filtering).
#[must_use]
pub fn is_blade(r: u8, g: u8, b: u8) -> bool {
    b > r && g > r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blade() {
        assert!(Region::Blade.contains(&Rgba([40, 200, 210, 255])));
        assert!(!Region::Blade.contains(&Rgba([40, 200, 210, 0])));
        assert!(!Region::Blade.contains(&Rgba([200, 50, 50, 255])));
        // Green alone is not enough
        assert!(!Region::Blade.contains(&Rgba([100, 200, 90, 255])));
    }

    #[test]
    fn test_handle() {
        assert!(Region::Handle.contains(&Rgba([137, 103, 39, 255])));
        assert!(!Region::Handle.contains(&Rgba([137, 103, 39, 0])));
        // Red over blue but too dark (blade of a netherite sword)
        assert!(!Region::Handle.contains(&Rgba([50, 30, 20, 255])));
        // Mean exactly 40 is excluded
        assert!(!Region::Handle.contains(&Rgba([60, 40, 20, 255])));
        assert!(Region::Handle.contains(&Rgba([61, 40, 20, 255])));
    }

    #[test]
    fn test_equal_red_blue_boundary() {
        let pixel = Rgba([120, 180, 120, 255]);
        assert!(!Region::Handle.contains(&pixel));
        assert!(!Region::Blade.contains(&pixel));
    }

    #[test]
    fn test_classification_is_pure() {
        let pixels = [
            Rgba([0, 0, 0, 0]),
            Rgba([255, 0, 0, 255]),
            Rgba([10, 200, 200, 128]),
            Rgba([90, 90, 90, 255]),
        ];
        for pixel in &pixels {
            for region in [Region::Blade, Region::Handle] {
                assert_eq!(region.contains(pixel), region.contains(pixel));
            }
        }
    }

    #[test]
    fn test_mask_is_row_major() {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(1, 0, Rgba([10, 200, 200, 255]));
        image.put_pixel(0, 1, Rgba([10, 200, 200, 255]));
        assert_eq!(Region::Blade.mask(&image), vec![false, true, true, false]);
    }
}
