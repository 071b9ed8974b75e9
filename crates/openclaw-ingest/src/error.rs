// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for ingest log writes.

use std::path::PathBuf;

use thiserror::Error;

/// Why an ingest log write failed.
///
/// Only surfaced by [`IngestLogWriter::try_append`](crate::IngestLogWriter::try_append).
/// The fail-open entry points render it into a diagnostic and drop it.
#[derive(Debug, Error)]
pub enum IngestLogError {
    /// The log file's parent directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The entry could not be rendered as JSON.
    #[error("failed to serialize ingest log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Opening or appending to the log file failed.
    #[error("failed to append to {}: {source}", path.display())]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },
}
