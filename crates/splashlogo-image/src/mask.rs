// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Background remover — reclassifies every pixel as transparent background or
// solid opaque black foreground.

use image::{DynamicImage, Rgba, RgbaImage};
use splashlogo_core::{ALPHA_CUTOFF, Threshold};
use tracing::{debug, instrument};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const SOLID_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Perceptual luminance using the sRGB (Rec. 709) channel weights.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
}

/// Classify a single RGBA pixel.
///
/// Nearly transparent pixels (alpha below [`ALPHA_CUTOFF`]) and pixels
/// brighter than `threshold` become fully transparent; everything else
/// becomes opaque black.
pub fn classify_pixel(pixel: Rgba<u8>, threshold: Threshold) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;
    if a < ALPHA_CUTOFF {
        return TRANSPARENT;
    }
    if luminance(r, g, b) > threshold.get() as f64 {
        TRANSPARENT
    } else {
        SOLID_BLACK
    }
}

/// Produce a solid-black-on-transparent copy of `image`.
///
/// The input is converted to RGBA first; formats without alpha become fully
/// opaque, so only the luminance test applies to them. Dimensions are
/// preserved and the input is left untouched.
#[instrument(skip_all, fields(width = image.width(), height = image.height(), threshold = %threshold))]
pub fn remove_background(image: &DynamicImage, threshold: Threshold) -> RgbaImage {
    let mut rgba = image.to_rgba8();
    let mut foreground = 0usize;

    for pixel in rgba.pixels_mut() {
        *pixel = classify_pixel(*pixel, threshold);
        if pixel.0[3] != 0 {
            foreground += 1;
        }
    }

    debug!(foreground, "Background removed");
    rgba
}
