// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Splash processor — chains loading, background removal, trim-and-pad, and
// PNG output around a single in-memory image.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use splashlogo_core::{CANVAS_SIZE, CONTENT_SIZE, Result, SplashError, Threshold};
use tracing::{debug, info, instrument};

use crate::compose;
use crate::mask;

/// Splash logo pipeline operating on a single in-memory image.
///
/// Each transform consumes `self` and returns a new `SplashProcessor`, so the
/// steps chain:
///
/// ```ignore
/// SplashProcessor::open("assets/images/logo.png")?
///     .remove_background(Threshold::DEFAULT)
///     .trim_and_pad(CANVAS_SIZE, CONTENT_SIZE)
///     .save("assets/images/splash-logo-black.png")?;
/// ```
pub struct SplashProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl SplashProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// A missing file is reported as [`SplashError::InputNotFound`] before the
    /// decoder is involved.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SplashError::InputNotFound(path.to_path_buf()));
        }

        let image = image::open(path).map_err(|source| SplashError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            "Source logo loaded"
        );
        Ok(Self { image })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Consume the processor and return the image as RGBA.
    pub fn into_rgba8(self) -> RgbaImage {
        self.image.into_rgba8()
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Replace the image with its solid-black-on-transparent mask.
    pub fn remove_background(self, threshold: Threshold) -> Self {
        let masked = mask::remove_background(&self.image, threshold);
        Self {
            image: DynamicImage::ImageRgba8(masked),
        }
    }

    /// Trim, fit into `content`, and centre on a `canvas`-sized square.
    pub fn trim_and_pad(self, canvas: u32, content: u32) -> Self {
        let rgba = self.image.into_rgba8();
        let composed = compose::trim_and_pad(&rgba, canvas, content);
        Self {
            image: DynamicImage::ImageRgba8(composed),
        }
    }

    /// Both transforms with the fixed splash geometry.
    pub fn splash(self, threshold: Threshold) -> Self {
        self.remove_background(threshold)
            .trim_and_pad(CANVAS_SIZE, CONTENT_SIZE)
    }

    // -- Output ---------------------------------------------------------------

    /// Write the image as PNG, creating missing parent directories first.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
            debug!(dir = %parent.display(), "Output directory ready");
        }

        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| SplashError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}
