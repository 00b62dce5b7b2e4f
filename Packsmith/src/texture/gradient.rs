//! Gradient re-theming
//!
//! Each pixel of the target region keeps its brightness but takes its hue
//! from a three-point gradient (edge -> dark -> medium -> bright). The
//! brightness range `[0, 1]` is split into three equal bands and the pixel
//! is linearly interpolated between the two anchors of its band. A little
//! integer noise is added per channel so large flat areas keep the speckled
//! look of vanilla textures.

use image::RgbaImage;
use rand::Rng;

use super::classify::Region;
use crate::color::{Rgb, Shades, mean_brightness};
use crate::error::{Error, Result};

/// Width of one brightness band.
const BAND: f32 = 1.0 / 3.0;
/// Per-channel noise amplitude (inclusive).
const NOISE: i32 = 2;

/// Interpolated, noise-free color for a normalized brightness in `[0, 1]`.
#[must_use]
pub fn gradient_color(shades: &Shades, brightness: f32) -> [f32; 3] {
    let brightness = brightness.clamp(0.0, 1.0);

    let (from, to, t) = if brightness < BAND {
        (shades.edge(), shades.dark, brightness / BAND)
    } else if brightness < 2.0 * BAND {
        (shades.dark, shades.medium, (brightness - BAND) / BAND)
    } else {
        (shades.medium, shades.bright, (brightness - 2.0 * BAND) / BAND)
    };

    lerp(from, to, t.clamp(0.0, 1.0))
}

/// Recolor every `region` pixel of `template` along the gradient of `shades`.
///
/// Noise is drawn from `rng` in row-major pixel order, three draws per
/// recolored pixel, so a fixed seed reproduces the output exactly. Pixels
/// outside the region are copied unchanged and alpha is always preserved.
pub fn recolor_gradient<R>(
    template: &RgbaImage,
    region: Region,
    shades: &Shades,
    rng: &mut R,
) -> Result<RgbaImage>
where
    R: Rng + ?Sized,
{
    let mask = region.mask(template);
    if !mask.contains(&true) {
        return Err(Error::NoClassifiedPixels {
            region: region.name(),
        });
    }

    let mut output = template.clone();
    for (pixel, _) in output.pixels_mut().zip(&mask).filter(|(_, hit)| **hit) {
        let [r, g, b, _] = pixel.0;
        let brightness = mean_brightness(r, g, b) / 255.0;
        let color = gradient_color(shades, brightness);

        for (channel, value) in pixel.0.iter_mut().take(3).zip(color) {
            let noise = rng.gen_range(-NOISE..=NOISE);
            // Truncate toward zero before clamping, like an integer cast
            *channel = ((value + noise as f32) as i32).clamp(0, 255) as u8;
        }
    }

    Ok(output)
}

fn lerp(from: Rgb, to: Rgb, t: f32) -> [f32; 3] {
    let channel = |a: u8, b: u8| {
        let a = f32::from(a);
        a + t * (f32::from(b) - a)
    };
    [
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    ]
}
