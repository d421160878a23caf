// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration.

use std::path::PathBuf;

use crate::types::Threshold;

/// Conventional location of the source logo.
pub const DEFAULT_INPUT: &str = "assets/images/logo-bixirun.png";

/// Conventional location of the generated splash logo.
pub const DEFAULT_OUTPUT: &str = "assets/images/splash-logo-black.png";

/// Settings for one generator run. Resolved once at startup and passed
/// explicitly; nothing reads ambient state after this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashConfig {
    /// Source raster image.
    pub input: PathBuf,
    /// Destination PNG. Missing parent directories are created.
    pub output: PathBuf,
    /// Luminance threshold for background removal.
    pub threshold: Threshold,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            threshold: Threshold::DEFAULT,
        }
    }
}
