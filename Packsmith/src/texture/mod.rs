//! Texture recoloring
//!
//! Region classification, palette extraction and the two recolor
//! strategies: gradient re-theming ([`recolor_gradient`]) and nearest-rank
//! palette mapping ([`remap_by_rank`]). All of them work on whole
//! [`RgbaImage`] buffers and never modify the template they are given.

mod classify;
mod gradient;
mod palette;
mod rank;

use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;
use rand::Rng;

use crate::color::Shades;
use crate::error::{Error, Result};

pub use classify::{Region, is_blade};
pub use gradient::{gradient_color, recolor_gradient};
pub use palette::{Palette, PaletteFilter};
pub use rank::remap_by_rank;

/// A resolved recolor operation for one output image.
#[derive(Debug, Clone)]
pub enum Recolor {
    /// Re-theme the blade along a gradient derived from one base color.
    Gradient(Shades),
    /// Swap the handle onto an existing palette by brightness rank.
    Palette(Palette),
}

impl Recolor {
    /// Region of the template this operation rewrites.
    #[must_use]
    pub const fn region(&self) -> Region {
        match self {
            Self::Gradient(_) => Region::Blade,
            Self::Palette(_) => Region::Handle,
        }
    }

    /// Apply to `template`, drawing gradient noise from `rng`.
    pub fn apply<R>(&self, template: &RgbaImage, rng: &mut R) -> Result<RgbaImage>
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Gradient(shades) => recolor_gradient(template, self.region(), shades, rng),
            Self::Palette(palette) => remap_by_rank(template, self.region(), palette),
        }
    }
}

/// Open an image file and convert it to RGBA8.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| Error::ImageOpenFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Write `image` as a PNG with maximum compression effort.
///
/// The image is encoded in memory first, so a failed encode leaves nothing
/// at `path`.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let mut png_data = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut png_data, CompressionType::Best, FilterType::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(|e| Error::PngEncodeFailed {
            message: e.to_string(),
        })?;
    std::fs::write(path.as_ref(), &png_data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use image::Rgba;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_recolor_regions() {
        let gradient = Recolor::Gradient(Shades::from_base(Rgb::new(74, 110, 41)));
        let palette = Recolor::Palette(Palette::new([Rgb::new(1, 2, 3)]));
        assert_eq!(gradient.region(), Region::Blade);
        assert_eq!(palette.region(), Region::Handle);
    }

    #[test]
    fn test_save_and_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sword.png");

        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([30, 200, 220, 255]));
        image.put_pixel(1, 0, Rgba([0, 0, 0, 0]));

        let mut rng = StdRng::seed_from_u64(42);
        let recolored = Recolor::Gradient(Shades::from_base(Rgb::new(143, 119, 99)))
            .apply(&image, &mut rng)
            .unwrap();
        save_png(&recolored, &path).unwrap();

        assert_eq!(load_rgba(&path).unwrap(), recolored);
    }

    #[test]
    fn test_failed_encode_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let result = save_png(&RgbaImage::new(0, 0), &path);

        assert!(matches!(result, Err(Error::PngEncodeFailed { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing() {
        let result = load_rgba("does/not/exist.png");
        assert!(matches!(result, Err(Error::ImageOpenFailed { .. })));
    }
}
