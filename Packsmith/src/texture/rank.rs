//! Nearest-rank palette mapping
//!
//! Reuses an existing material's exact colors: region pixels are ranked by
//! brightness relative to the darkest and brightest region pixel, and each
//! one takes the palette entry of matching rank.

use image::RgbaImage;

use super::classify::Region;
use super::palette::Palette;
use crate::color::mean_brightness;
use crate::error::{Error, Result};

/// Normalized brightness used when every region pixel is equally bright.
const FLAT_NORM: f32 = 0.5;

/// Replace the RGB of every `region` pixel with the palette entry whose
/// brightness rank matches the pixel's normalized brightness.
///
/// Fails with [`Error::NoClassifiedPixels`] when the template has no
/// region pixels and with [`Error::EmptyPalette`] when there is nothing to
/// map onto. Alpha and non-region pixels are left untouched.
pub fn remap_by_rank(template: &RgbaImage, region: Region, palette: &Palette) -> Result<RgbaImage> {
    let mask = region.mask(template);
    let brightness: Vec<Option<f32>> = template
        .pixels()
        .zip(&mask)
        .map(|(p, &hit)| hit.then(|| mean_brightness(p.0[0], p.0[1], p.0[2])))
        .collect();

    let Some((min, max)) = brightness.iter().flatten().fold(None, |range, &b| match range {
        None => Some((b, b)),
        Some((lo, hi)) => Some((f32::min(lo, b), f32::max(hi, b))),
    }) else {
        return Err(Error::NoClassifiedPixels {
            region: region.name(),
        });
    };

    if palette.is_empty() {
        return Err(Error::EmptyPalette);
    }

    let mut output = template.clone();
    for (pixel, value) in output.pixels_mut().zip(&brightness) {
        let Some(value) = value else { continue };
        let norm = if max > min {
            (value - min) / (max - min)
        } else {
            FLAT_NORM
        };
        if let Some(color) = palette.nearest_rank(norm) {
            pixel.0[..3].copy_from_slice(&color.to_array());
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use image::Rgba;

    fn gold() -> Palette {
        Palette::new([
            Rgb::new(110, 70, 10),
            Rgb::new(180, 130, 20),
            Rgb::new(230, 190, 50),
            Rgb::new(255, 250, 150),
        ])
    }

    #[test]
    fn test_darkest_and_brightest_map_to_ends() {
        let mut template = RgbaImage::new(3, 1);
        // Means 60, 96 and 120
        template.put_pixel(0, 0, Rgba([90, 60, 30, 255]));
        template.put_pixel(1, 0, Rgba([140, 100, 48, 200]));
        template.put_pixel(2, 0, Rgba([180, 120, 60, 255]));

        let output = remap_by_rank(&template, Region::Handle, &gold()).unwrap();
        assert_eq!(output.get_pixel(0, 0).0, [110, 70, 10, 255]);
        // norm 0.6: round(0.6 * 3) = 2
        assert_eq!(output.get_pixel(1, 0).0, [230, 190, 50, 200]);
        assert_eq!(output.get_pixel(2, 0).0, [255, 250, 150, 255]);
    }

    #[test]
    fn test_flat_brightness_uses_middle_rank() {
        let template = RgbaImage::from_pixel(2, 2, Rgba([120, 90, 40, 255]));
        let palette = Palette::new([
            Rgb::new(10, 10, 10),
            Rgb::new(50, 50, 50),
            Rgb::new(90, 90, 90),
        ]);

        let output = remap_by_rank(&template, Region::Handle, &palette).unwrap();
        for pixel in output.pixels() {
            assert_eq!(pixel.0, [50, 50, 50, 255]);
        }
    }

    #[test]
    fn test_non_region_pixels_untouched() {
        let mut template = RgbaImage::new(4, 1);
        template.put_pixel(0, 0, Rgba([120, 90, 40, 255]));
        template.put_pixel(1, 0, Rgba([40, 40, 45, 255]));
        template.put_pixel(2, 0, Rgba([100, 100, 100, 255]));
        template.put_pixel(3, 0, Rgba([120, 90, 40, 0]));

        let output = remap_by_rank(&template, Region::Handle, &gold()).unwrap();
        assert_ne!(output.get_pixel(0, 0), template.get_pixel(0, 0));
        for x in 1..4 {
            assert_eq!(output.get_pixel(x, 0), template.get_pixel(x, 0));
        }
    }

    #[test]
    fn test_no_handle_pixels() {
        let template = RgbaImage::from_pixel(2, 2, Rgba([30, 200, 220, 255]));
        let result = remap_by_rank(&template, Region::Handle, &gold());
        assert!(matches!(result, Err(Error::NoClassifiedPixels { region: "handle" })));
    }

    #[test]
    fn test_empty_palette() {
        let template = RgbaImage::from_pixel(2, 2, Rgba([120, 90, 40, 255]));
        let result = remap_by_rank(&template, Region::Handle, &Palette::default());
        assert!(matches!(result, Err(Error::EmptyPalette)));
    }
}
