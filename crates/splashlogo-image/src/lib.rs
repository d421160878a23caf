// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// splashlogo-image — Image transforms for the splash logo generator.
//
// Provides background removal (threshold the source into solid black on
// transparent), trim-and-pad composition onto a fixed square canvas, and a
// chainable processor wrapping both with file I/O.

pub mod compose;
pub mod mask;
pub mod processor;

// Re-export the primary entry points so callers can use `splashlogo_image::trim_and_pad` etc.
pub use compose::{alpha_bounding_box, contain_dimensions, trim_and_pad};
pub use mask::{classify_pixel, luminance, remove_background};
pub use processor::SplashProcessor;
