//! Per-pixel black mask.

use image::{Rgba, RgbaImage};

use crate::image::{ALPHA_CHANNEL, TRANSPARENT};

/// Whether a pixel counts as background for `threshold`.
///
/// All three color channels must be strictly below the threshold; alpha is
/// ignored. Comparison happens in `i32` so thresholds outside `0..=255`
/// behave as plain integer bounds.
#[inline]
#[must_use]
pub fn is_black(pixel: &Rgba<u8>, threshold: i32) -> bool {
    let [r, g, b, _] = pixel.0;
    i32::from(r) < threshold && i32::from(g) < threshold && i32::from(b) < threshold
}

/// Zero the alpha of every black pixel in place.
///
/// Color channels are never touched, and pixels outside the mask keep their
/// original alpha. Returns how many pixels matched the mask.
pub fn strip_background(img: &mut RgbaImage, threshold: i32) -> usize {
    let mut stripped = 0;

    for pixel in img.pixels_mut() {
        if is_black(pixel, threshold) {
            pixel[ALPHA_CHANNEL] = TRANSPARENT;
            stripped += 1;
        }
    }

    stripped
}
