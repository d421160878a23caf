// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared domain types: luminance threshold, bounding box, and the fixed
// canvas geometry.

use std::fmt;
use std::str::FromStr;

use crate::error::SplashError;

/// Side length of the square output canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Largest footprint scaled content may occupy inside the canvas.
pub const CONTENT_SIZE: u32 = 880;

/// Source pixels with alpha below this value are always background.
pub const ALPHA_CUTOFF: u8 = 8;

/// Name of the environment variable that overrides the threshold.
pub const THRESHOLD_ENV: &str = "SPLASH_THRESHOLD";

/// Luminance threshold separating foreground (dark) from background (light).
///
/// Conceptually in `0..=255`, but no bound is enforced: a negative value makes
/// every pixel background, anything at or above 255 keeps every opaque pixel.
/// Stored as `i64`, which is the only limit on the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(i64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(230);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Threshold {
    type Err = SplashError;

    /// Parse a base-10 integer in the `i64` range, ignoring surrounding
    /// whitespace. Single underscores between digits are allowed (`1_000`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| SplashError::InvalidThreshold {
            value: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        let digits = trimmed.trim_start_matches(['+', '-']);
        if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
            return Err(invalid("misplaced digit separator".into()));
        }

        trimmed
            .replace('_', "")
            .parse::<i64>()
            .map(Self)
            .map_err(|err| invalid(err.to_string()))
    }
}

/// Axis-aligned rectangle in pixel coordinates. `right` and `bottom` are
/// exclusive. `alpha_bounding_box` never produces an empty box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
