// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ingest-only mode and the inbound message ingest log.
//!
//! Two independent helpers for the inbound pipeline:
//! - a cached "ingest-only mode" flag driven by `OPENCLAW_INGEST_ONLY`
//! - a fail-open JSON Lines log of every received message
//!
//! # Usage
//!
//! ```no_run
//! use openclaw_ingest::{append_ingest_log, is_ingest_only_mode, IngestLogEntry};
//!
//! if is_ingest_only_mode() {
//!     append_ingest_log(&IngestLogEntry::new("sms").message_id("m1").body("hi"));
//! }
//! ```

pub mod entry;
pub mod error;
pub mod mode;
pub mod runtime;
pub mod writer;

pub use entry::IngestLogEntry;
pub use error::IngestLogError;
pub use mode::IngestOnlyFlag;
pub use runtime::{
    append_ingest_log, global, is_ingest_only_mode, reset_ingest_only_cache, IngestRuntime,
};
pub use writer::{resolve_ingest_log_path, IngestLogWriter, INGEST_LOG_FILE_NAME};
