// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trim-and-pad composer — crop to visible content, fit it into the content
// box, and centre it on a transparent square canvas.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use splashlogo_core::BoundingBox;
use tracing::{debug, info, instrument};

/// Smallest rectangle enclosing every pixel with non-zero alpha, or `None`
/// when the image is fully transparent.
pub fn alpha_bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bbox = Some(match bbox {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    bbox
}

/// Dimensions of a `width` x `height` image after a "contain" fit into a
/// `content` x `content` box.
///
/// The longer side becomes exactly `content` (scaling up or down); the shorter
/// side keeps the aspect ratio, rounded half-up and never below one pixel.
pub fn contain_dimensions(width: u32, height: u32, content: u32) -> (u32, u32) {
    let scale_short = |short: u32, long: u32| -> u32 {
        let scaled = (f64::from(short) * f64::from(content) / f64::from(long)).round();
        (scaled as u32).clamp(1, content.max(1))
    };

    if width >= height {
        (content, scale_short(height, width))
    } else {
        (scale_short(width, height), content)
    }
}

/// Trim transparent borders, fit the remainder into `content`, and centre it
/// on a transparent `canvas` x `canvas` image.
///
/// A fully transparent input is not cropped and yields an empty canvas.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn trim_and_pad(image: &RgbaImage, canvas: u32, content: u32) -> RgbaImage {
    let mut output = RgbaImage::new(canvas, canvas);

    let trimmed = match alpha_bounding_box(image) {
        Some(bbox) => {
            debug!(%bbox, "Trimming to visible content");
            imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
        }
        None => {
            debug!("No visible content, skipping trim");
            image.clone()
        }
    };

    if trimmed.width() == 0 || trimmed.height() == 0 || content == 0 {
        return output;
    }

    let (scaled_w, scaled_h) = contain_dimensions(trimmed.width(), trimmed.height(), content);
    let scaled = imageops::resize(&trimmed, scaled_w, scaled_h, FilterType::Lanczos3);

    // Floor division keeps any odd remainder on the right/bottom.
    let x = (i64::from(canvas) - i64::from(scaled_w)).div_euclid(2);
    let y = (i64::from(canvas) - i64::from(scaled_h)).div_euclid(2);
    info!(scaled_w, scaled_h, x, y, "Placing content on canvas");

    paste_masked(&mut output, &scaled, x, y);
    output
}

/// Paste `src` onto `dst` at (`x`, `y`) using the source alpha as the mask.
///
/// Every channel, alpha included, becomes `src * m + dst * (1 - m)` with
/// `m = src alpha`, so partially transparent edge pixels pasted onto an empty
/// canvas end up with alpha of roughly `a * a / 255`. Pixels falling outside
/// `dst` are skipped.
fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dst_w, dst_h) = (i64::from(dst.width()), i64::from(dst.height()));

    for (sx, sy, pixel) in src.enumerate_pixels() {
        let (dx, dy) = (x + i64::from(sx), y + i64::from(sy));
        if dx < 0 || dy < 0 || dx >= dst_w || dy >= dst_h {
            continue;
        }

        let m = u32::from(pixel.0[3]);
        if m == 0 {
            continue;
        }
        let under = dst.get_pixel_mut(dx as u32, dy as u32);
        let blend = |s: u8, d: u8| -> u8 {
            ((u32::from(s) * m + u32::from(d) * (255 - m) + 127) / 255) as u8
        };
        let Rgba([sr, sg, sb, sa]) = *pixel;
        let Rgba([dr, dg, db, da]) = *under;
        *under = Rgba([blend(sr, dr), blend(sg, dg), blend(sb, db), blend(sa, da)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn black_rect_on_clear(w: u32, h: u32, rect: BoundingBox) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if x >= rect.left && x < rect.right && y >= rect.top && y < rect.bottom {
                BLACK
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn bounding_box_of_empty_image_is_none() {
        assert_eq!(alpha_bounding_box(&RgbaImage::new(10, 10)), None);
        assert_eq!(alpha_bounding_box(&RgbaImage::new(0, 0)), None);
    }

    #[test]
    fn bounding_box_is_exclusive_on_right_and_bottom() {
        let rect = BoundingBox {
            left: 3,
            top: 5,
            right: 9,
            bottom: 6,
        };
        let img = black_rect_on_clear(20, 20, rect);
        assert_eq!(alpha_bounding_box(&img), Some(rect));
    }

    /// Any non-zero alpha counts as content, not just opaque pixels.
    #[test]
    fn bounding_box_counts_faint_pixels() {
        let mut img = RgbaImage::new(10, 10);
        img.put_pixel(0, 9, Rgba([255, 255, 255, 1]));
        img.put_pixel(7, 2, BLACK);
        let bbox = alpha_bounding_box(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 0,
                top: 2,
                right: 8,
                bottom: 10
            }
        );
    }

    #[test]
    fn contain_scales_down_wide_image() {
        assert_eq!(contain_dimensions(2048, 1024, 880), (880, 440));
    }

    #[test]
    fn contain_scales_up_tall_image() {
        assert_eq!(contain_dimensions(100, 300, 880), (293, 880));
    }

    #[test]
    fn contain_keeps_square_square() {
        assert_eq!(contain_dimensions(200, 200, 880), (880, 880));
    }

    /// 880 * 3 / 16 = 165.0, 880 * 5 / 16 = 275.0, 880 * 1 / 32 = 27.5 -> 28.
    #[test]
    fn contain_rounds_half_up() {
        assert_eq!(contain_dimensions(32, 1, 880), (880, 28));
        assert_eq!(contain_dimensions(16, 3, 880), (880, 165));
    }

    #[test]
    fn contain_never_collapses_to_zero() {
        assert_eq!(contain_dimensions(10_000, 1, 880), (880, 1));
    }

    #[test]
    fn trim_and_pad_centres_square() {
        let img = black_rect_on_clear(
            400,
            300,
            BoundingBox {
                left: 100,
                top: 50,
                right: 300,
                bottom: 250,
            },
        );
        let out = trim_and_pad(&img, 1024, 880);

        assert_eq!(out.dimensions(), (1024, 1024));
        assert_eq!(
            alpha_bounding_box(&out),
            Some(BoundingBox {
                left: 72,
                top: 72,
                right: 952,
                bottom: 952
            })
        );
        let Rgba([r, g, b, a]) = *out.get_pixel(512, 512);
        assert_eq!((r, g, b), (0, 0, 0));
        assert!(a >= 250, "centre alpha {a}");
        assert_eq!(out.get_pixel(71, 512).0[3], 0);
    }

    #[test]
    fn trim_and_pad_places_wide_content_vertically_centred() {
        let img = RgbaImage::from_pixel(2048, 1024, BLACK);
        let out = trim_and_pad(&img, 1024, 880);
        assert_eq!(
            alpha_bounding_box(&out),
            Some(BoundingBox {
                left: 72,
                top: 292,
                right: 952,
                bottom: 732
            })
        );
    }

    /// Odd leftover space goes to the right: (1024 - 293) / 2 = 365.
    #[test]
    fn trim_and_pad_floors_odd_offsets() {
        let img = RgbaImage::from_pixel(100, 300, BLACK);
        let out = trim_and_pad(&img, 1024, 880);
        let bbox = alpha_bounding_box(&out).unwrap();
        assert_eq!(bbox.left, 365);
        assert_eq!(bbox.width(), 293);
        assert_eq!(1024 - bbox.right, 366);
    }

    #[test]
    fn trim_and_pad_empty_input_gives_empty_canvas() {
        let out = trim_and_pad(&RgbaImage::new(50, 80), 1024, 880);
        assert_eq!(out.dimensions(), (1024, 1024));
        assert!(out.pixels().all(|p| p.0[3] == 0));
    }

    /// A half-transparent pixel on an empty canvas keeps about a quarter of
    /// its opacity: (128 * 128 + 127) / 255 = 64.
    #[test]
    fn paste_squares_partial_alpha_on_empty_canvas() {
        let mut src = RgbaImage::from_pixel(3, 3, BLACK);
        src.put_pixel(1, 1, Rgba([0, 0, 0, 128]));
        src.put_pixel(2, 2, Rgba([200, 100, 50, 0]));
        let mut canvas = RgbaImage::new(10, 10);

        paste_masked(&mut canvas, &src, 4, 5);

        assert_eq!(*canvas.get_pixel(5, 6), Rgba([0, 0, 0, 64]));
        assert_eq!(*canvas.get_pixel(4, 5), BLACK);
        assert_eq!(*canvas.get_pixel(6, 7), Rgba([0, 0, 0, 0]));
        assert_eq!(*canvas.get_pixel(3, 5), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn paste_blends_against_existing_canvas() {
        let src = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 51]));
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));

        paste_masked(&mut canvas, &src, 0, 0);

        // 255 * 51 / 255 = 51 for colour; alpha 51 * 51 + 255 * 204 -> 214.
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([51, 51, 51, 214]));
    }

    #[test]
    fn paste_clips_out_of_bounds_offsets() {
        let src = RgbaImage::from_pixel(4, 4, BLACK);
        let mut canvas = RgbaImage::new(3, 3);

        paste_masked(&mut canvas, &src, -2, 1);

        assert_eq!(*canvas.get_pixel(0, 1), BLACK);
        assert_eq!(*canvas.get_pixel(1, 2), BLACK);
        assert_eq!(canvas.get_pixel(2, 0).0[3], 0);
        assert_eq!(canvas.get_pixel(2, 1).0[3], 0);
    }

    /// Edge opacity from the resampled content is squared by the paste, not
    /// copied through.
    #[test]
    fn trim_and_pad_masks_partial_alpha() {
        let mut img = RgbaImage::from_pixel(880, 880, BLACK);
        img.put_pixel(440, 440, Rgba([0, 0, 0, 128]));

        let out = trim_and_pad(&img, 1024, 880);

        let a = out.get_pixel(512, 512).0[3];
        assert!((60..=68).contains(&a), "alpha {a}");
        assert_eq!(out.get_pixel(100, 100).0[3], 255);
    }
}
