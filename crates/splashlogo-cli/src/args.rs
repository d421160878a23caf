// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;
use splashlogo_core::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use splashlogo_core::{Result, SplashConfig, THRESHOLD_ENV, Threshold};

/// Generate a solid black, transparent-background splash logo (1024x1024,
/// centred, with safe padding) from a source logo.
#[derive(Parser, Debug, Clone)]
#[command(name = "splashlogo", version, about, long_about = None)]
pub struct Cli {
    /// Source logo image
    #[arg(short, long, default_value = DEFAULT_INPUT, value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Destination PNG (parent directories are created)
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Luminance threshold; brighter pixels become transparent [default: 230]
    #[arg(short, long, env = THRESHOLD_ENV)]
    pub threshold: Option<String>,
}

impl Cli {
    /// Resolve the run configuration. The threshold is parsed here so a bad
    /// value aborts before any image work starts.
    pub fn into_config(self) -> Result<SplashConfig> {
        let threshold = match self.threshold.as_deref() {
            Some(raw) => raw.parse::<Threshold>()?,
            None => Threshold::DEFAULT,
        };

        Ok(SplashConfig {
            input: self.input,
            output: self.output,
            threshold,
        })
    }
}
