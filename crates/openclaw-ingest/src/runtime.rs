// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-lifetime ingest state.
//!
//! [`IngestRuntime`] owns the mode flag cache and the log writer's
//! directory-ensured flag together with the environment they read. Tests build
//! their own runtime over a [`MapEnv`](openclaw_config::MapEnv); production
//! code uses the process-wide instance behind the free functions below.

use std::path::PathBuf;
use std::sync::LazyLock;

use openclaw_config::{EnvSource, ProcessEnv};

use crate::entry::IngestLogEntry;
use crate::mode::IngestOnlyFlag;
use crate::writer::{resolve_ingest_log_path, IngestLogWriter};

/// Ingest mode flag and log writer bound to one environment.
#[derive(Debug, Default)]
pub struct IngestRuntime<E = ProcessEnv> {
    env: E,
    ingest_only: IngestOnlyFlag,
    writer: IngestLogWriter,
}

impl IngestRuntime<ProcessEnv> {
    /// A runtime over the real process environment.
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> IngestRuntime<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            ingest_only: IngestOnlyFlag::new(),
            writer: IngestLogWriter::new(),
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Whether ingest-only mode is active. Read once, then cached.
    pub fn is_ingest_only_mode(&self) -> bool {
        self.ingest_only.get(&self.env)
    }

    /// Make the next [`is_ingest_only_mode`](Self::is_ingest_only_mode) re-read the environment.
    pub fn reset_ingest_only_cache(&self) {
        self.ingest_only.reset();
    }

    /// Where the next append would write.
    pub fn resolve_log_path(&self) -> PathBuf {
        resolve_ingest_log_path(&self.env)
    }

    /// Append `entry` to the ingest log. Never fails; see [`IngestLogWriter::append`].
    pub fn append_ingest_log(&self, entry: &IngestLogEntry) {
        self.writer.append(&self.env, entry);
    }

    pub fn writer(&self) -> &IngestLogWriter {
        &self.writer
    }

    /// Clear both the mode cache and the directory-ensured flag.
    pub fn reset(&self) {
        self.ingest_only.reset();
        self.writer.reset();
    }
}

static GLOBAL: LazyLock<IngestRuntime> = LazyLock::new(IngestRuntime::from_process_env);

/// The process-wide runtime used by the free functions.
pub fn global() -> &'static IngestRuntime {
    &GLOBAL
}

/// Whether ingest-only mode is active for this process.
///
/// Reads `OPENCLAW_INGEST_ONLY` on first call and caches the answer.
pub fn is_ingest_only_mode() -> bool {
    GLOBAL.is_ingest_only_mode()
}

/// Drop the cached ingest-only answer so the next check re-reads the environment.
pub fn reset_ingest_only_cache() {
    GLOBAL.reset_ingest_only_cache();
}

/// Append `entry` to this process's ingest log. Never fails.
pub fn append_ingest_log(entry: &IngestLogEntry) {
    GLOBAL.append_ingest_log(entry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use openclaw_config::{MapEnv, INGEST_LOG_PATH_ENV, INGEST_ONLY_ENV};
    use serial_test::serial;

    #[test]
    fn fresh_runtimes_are_independent() {
        let a = IngestRuntime::new(MapEnv::new().with(INGEST_ONLY_ENV, "1"));
        let b = IngestRuntime::new(MapEnv::new());

        assert!(a.is_ingest_only_mode());
        assert!(!b.is_ingest_only_mode());
    }

    #[test]
    fn reset_clears_both_caches() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs/ingest.jsonl");
        let runtime = IngestRuntime::new(
            MapEnv::new()
                .with(INGEST_ONLY_ENV, "yes")
                .with(INGEST_LOG_PATH_ENV, path.to_string_lossy()),
        );

        assert!(runtime.is_ingest_only_mode());
        runtime.append_ingest_log(&IngestLogEntry::new("sms"));
        assert!(runtime.writer().dir_ensured());

        runtime.env().set(INGEST_ONLY_ENV, "no");
        runtime.reset();
        assert!(!runtime.writer().dir_ensured());
        assert!(!runtime.is_ingest_only_mode());
    }

    #[test]
    #[serial]
    fn global_mode_flag_memoizes_and_resets() {
        // SAFETY: test-only env mutation, serialized with #[serial].
        unsafe { std::env::set_var(INGEST_ONLY_ENV, "true") };
        reset_ingest_only_cache();
        assert!(is_ingest_only_mode());

        unsafe { std::env::set_var(INGEST_ONLY_ENV, "false") };
        assert!(is_ingest_only_mode(), "must not re-read without a reset");

        reset_ingest_only_cache();
        assert!(!is_ingest_only_mode());

        unsafe { std::env::remove_var(INGEST_ONLY_ENV) };
        reset_ingest_only_cache();
    }

    #[test]
    #[serial]
    fn global_append_honors_path_override() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("global.jsonl");
        // SAFETY: test-only env mutation, serialized with #[serial].
        unsafe { std::env::set_var(INGEST_LOG_PATH_ENV, &path) };
        global().writer().reset();

        append_ingest_log(&IngestLogEntry::new("sms").message_id("g1"));

        unsafe { std::env::remove_var(INGEST_LOG_PATH_ENV) };
        global().writer().reset();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(content.trim_end()).unwrap();
        assert_eq!(value["messageId"], "g1");
    }
}
