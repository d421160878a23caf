// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// splashlogo — Splash logo generator
//
// Entry point. Initialises logging, resolves the run configuration, runs the
// pipeline, and maps failures to a non-zero exit status.

mod args;
mod run;

use std::process::ExitCode;

use clap::Parser;
use splashlogo_core::human_errors::humanize_error;
use splashlogo_core::SplashError;

use args::Cli;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the summary line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().into_config().and_then(|config| run::run(&config)) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn report(err: &SplashError) -> ExitCode {
    tracing::error!(error = %err, "splash generation failed");
    let human = humanize_error(err);
    eprintln!("{}\n{}", human.message, human.suggestion);
    ExitCode::FAILURE
}
