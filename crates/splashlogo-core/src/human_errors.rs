// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to a plain sentence with a concrete
// suggestion. The technical detail is kept separately for logs.

use crate::error::SplashError;
use crate::types::THRESHOLD_ENV;

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary (printed first).
    pub message: String,
    /// What the user should try next.
    pub suggestion: String,
}

/// Convert a `SplashError` into a `HumanError`.
pub fn humanize_error(err: &SplashError) -> HumanError {
    match err {
        SplashError::InvalidThreshold { value, .. } => HumanError {
            message: format!("The splash threshold {value:?} is not a whole number."),
            suggestion: format!(
                "Set {THRESHOLD_ENV} (or --threshold) to an integer such as 230, or unset it to use the default."
            ),
        },

        SplashError::InputNotFound(path) => HumanError {
            message: format!("Input not found: {}", path.display()),
            suggestion: "Check the path, or pass the source logo with --input.".into(),
        },

        SplashError::Decode { path, .. } => HumanError {
            message: format!("{} could not be read as an image.", path.display()),
            suggestion: "Make sure the file is a PNG, JPEG, WebP, GIF, or BMP and is not truncated."
                .into(),
        },

        SplashError::Encode { path, .. } => HumanError {
            message: format!("The splash logo could not be written to {}.", path.display()),
            suggestion: "Check that the output location is writable and the disk is not full."
                .into(),
        },

        SplashError::Io(io) => HumanError {
            message: "A file system operation failed.".into(),
            suggestion: format!("Check permissions on the output directory. ({io})"),
        },
    }
}
