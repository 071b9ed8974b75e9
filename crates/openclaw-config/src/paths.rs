// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! State directory resolution.
//!
//! Lookup order:
//! 1. `OPENCLAW_STATE_DIR`
//! 2. `CLAWDBOT_STATE_DIR` (legacy)
//! 3. `~/.openclaw`, or `~/.clawdbot` when only the legacy directory exists
//!
//! Resolution is pure path computation. Nothing is created on disk.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::env::{non_empty_var, EnvSource, LEGACY_STATE_DIR_ENV, STATE_DIR_ENV};

/// Name of the state directory under the user's home.
pub const STATE_DIR_NAME: &str = ".openclaw";

/// Pre-rename state directory name.
pub const LEGACY_STATE_DIR_NAME: &str = ".clawdbot";

/// Resolve the state directory using the current user's home directory.
pub fn resolve_state_dir(env: &dyn EnvSource) -> PathBuf {
    resolve_state_dir_with_home(env, dirs::home_dir().as_deref())
}

/// Resolve the state directory against an explicit home directory.
///
/// With no home directory, `~` is left unexpanded and the default falls back
/// to a relative `.openclaw`.
pub fn resolve_state_dir_with_home(env: &dyn EnvSource, home: Option<&Path>) -> PathBuf {
    let explicit =
        non_empty_var(env, STATE_DIR_ENV).or_else(|| non_empty_var(env, LEGACY_STATE_DIR_ENV));
    if let Some(raw) = explicit {
        let dir = expand_home_with(&raw, home);
        trace!(path = %dir.display(), "state dir from environment");
        return dir;
    }

    let Some(home) = home else {
        return PathBuf::from(STATE_DIR_NAME);
    };

    let current = home.join(STATE_DIR_NAME);
    let legacy = home.join(LEGACY_STATE_DIR_NAME);
    if !current.exists() && legacy.is_dir() {
        trace!(path = %legacy.display(), "using legacy state dir");
        return legacy;
    }
    current
}

/// Expand a leading `~` against the current user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    expand_home_with(raw, dirs::home_dir().as_deref())
}

fn expand_home_with(raw: &str, home: Option<&Path>) -> PathBuf {
    match (raw, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (_, Some(home)) if raw.starts_with("~/") => home.join(&raw[2..]),
        _ => PathBuf::from(raw),
    }
}
