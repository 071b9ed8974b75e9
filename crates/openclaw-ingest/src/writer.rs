// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort JSON Lines log of received inbound messages.
//!
//! Each call re-resolves the destination (`OPENCLAW_INGEST_LOG_JSON_PATH`, or
//! `<state-dir>/ingest-log.jsonl`) and appends one line. The parent directory
//! is created at most once per writer: after the first success the writer
//! trusts it to exist, so a directory removed later makes appends fail rather
//! than silently reappear.
//!
//! [`IngestLogWriter::append`] never fails. Write errors become a `debug!`
//! diagnostic so the inbound pipeline is never held up by logging.
//! Files are never locked or rotated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use openclaw_config::{non_empty_var, resolve_state_dir, EnvSource, INGEST_LOG_PATH_ENV};
use tracing::debug;

use crate::entry::IngestLogEntry;
use crate::error::IngestLogError;

/// File name of the ingest log inside the state directory.
pub const INGEST_LOG_FILE_NAME: &str = "ingest-log.jsonl";

/// Resolve where the ingest log lives for the given environment.
pub fn resolve_ingest_log_path(env: &dyn EnvSource) -> PathBuf {
    match non_empty_var(env, INGEST_LOG_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None => resolve_state_dir(env).join(INGEST_LOG_FILE_NAME),
    }
}

/// Appends [`IngestLogEntry`] records to the ingest log.
#[derive(Debug, Default)]
pub struct IngestLogWriter {
    dir_ensured: AtomicBool,
}

impl IngestLogWriter {
    pub const fn new() -> Self {
        Self {
            dir_ensured: AtomicBool::new(false),
        }
    }

    /// Whether the log directory has already been created by this writer.
    pub fn dir_ensured(&self) -> bool {
        self.dir_ensured.load(Ordering::Acquire)
    }

    /// Forget that the directory was created; the next append creates it again.
    pub fn reset(&self) {
        self.dir_ensured.store(false, Ordering::Release);
    }

    /// Append `entry`, swallowing any failure.
    ///
    /// Success and failure are both reported through `tracing::debug!` only.
    pub fn append(&self, env: &dyn EnvSource, entry: &IngestLogEntry) {
        match self.try_append(env, entry) {
            Ok(path) => {
                debug!(
                    path = %path.display(),
                    channel = %entry.channel,
                    "ingest-only: logged message"
                );
            }
            Err(err) => {
                debug!(error = %err, "ingest-only: failed to write ingest log");
            }
        }
    }

    /// Append `entry` and return the file written to.
    pub fn try_append(
        &self,
        env: &dyn EnvSource,
        entry: &IngestLogEntry,
    ) -> Result<PathBuf, IngestLogError> {
        let path = resolve_ingest_log_path(env);
        self.ensure_dir(&path)?;

        let line = entry.to_json_line()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| IngestLogError::Append {
                path: path.clone(),
                source,
            })?;
        // Single write per line; O_APPEND keeps lines from separate writers whole.
        file.write_all(line.as_bytes())
            .map_err(|source| IngestLogError::Append {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), IngestLogError> {
        if self.dir_ensured() {
            return Ok(());
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| IngestLogError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        self.dir_ensured.store(true, Ordering::Release);
        Ok(())
    }
}
