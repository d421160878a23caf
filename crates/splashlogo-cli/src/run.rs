// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Orchestration: load the source logo, run both transforms in memory, then
// write the PNG.

use std::fmt;
use std::path::PathBuf;

use splashlogo_core::{Result, SplashConfig, Threshold};
use splashlogo_image::SplashProcessor;
use tracing::{info, instrument};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashSummary {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub threshold: Threshold,
}

impl fmt::Display for SplashSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} ({}x{}) with threshold={}",
            self.output.display(),
            self.width,
            self.height,
            self.threshold
        )
    }
}

/// Generate the splash logo described by `config`.
///
/// Nothing is written unless loading and both transforms succeed.
#[instrument(skip_all, fields(
    input = %config.input.display(),
    output = %config.output.display(),
    threshold = %config.threshold,
))]
pub fn run(config: &SplashConfig) -> Result<SplashSummary> {
    let splash = SplashProcessor::open(&config.input)?.splash(config.threshold);
    splash.save(&config.output)?;

    let summary = SplashSummary {
        output: config.output.clone(),
        width: splash.width(),
        height: splash.height(),
        threshold: config.threshold,
    };
    info!(width = summary.width, height = summary.height, "Splash logo written");
    Ok(summary)
}
