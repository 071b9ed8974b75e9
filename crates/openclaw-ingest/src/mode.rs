// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memoized ingest-only mode flag.
//!
//! The flag is read from `OPENCLAW_INGEST_ONLY` on first use and then held
//! until [`IngestOnlyFlag::reset`] is called. Later changes to the environment
//! are invisible until a reset.

use std::sync::atomic::{AtomicU8, Ordering};

use openclaw_config::{is_truthy_env_value, EnvSource, INGEST_ONLY_ENV};
use tracing::debug;

const UNSET: u8 = 0;
const OFF: u8 = 1;
const ON: u8 = 2;

/// Cached "is ingest-only mode active" flag.
///
/// Two threads racing on the first read may both consult the environment.
/// They store the same value, so the race is harmless.
#[derive(Debug, Default)]
pub struct IngestOnlyFlag {
    state: AtomicU8,
}

impl IngestOnlyFlag {
    /// Create an unset flag.
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(UNSET),
        }
    }

    /// Return the cached value, computing it from `env` if unset.
    pub fn get(&self, env: &dyn EnvSource) -> bool {
        match self.state.load(Ordering::Acquire) {
            ON => true,
            OFF => false,
            _ => {
                let enabled = is_truthy_env_value(env.var(INGEST_ONLY_ENV).as_deref());
                self.state
                    .store(if enabled { ON } else { OFF }, Ordering::Release);
                debug!(enabled, "ingest-only mode resolved");
                enabled
            }
        }
    }

    /// The cached value, or `None` if the next [`get`](Self::get) will read the environment.
    pub fn cached(&self) -> Option<bool> {
        match self.state.load(Ordering::Acquire) {
            ON => Some(true),
            OFF => Some(false),
            _ => None,
        }
    }

    /// Forget the cached value.
    pub fn reset(&self) {
        self.state.store(UNSET, Ordering::Release);
    }
}
