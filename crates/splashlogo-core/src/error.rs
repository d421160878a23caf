// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the splash logo generator.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all splash logo operations.
///
/// Every variant is fatal for the current run; nothing is retried.
#[derive(Debug, Error)]
pub enum SplashError {
    // -- Configuration --
    #[error("invalid splash threshold {value:?}: {reason}")]
    InvalidThreshold { value: String, reason: String },

    // -- Input --
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // -- Output --
    #[error("failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SplashError>;
