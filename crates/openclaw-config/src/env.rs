// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable access and boolean flag parsing.
//!
//! Everything that reads `OPENCLAW_*` variables goes through [`EnvSource`] so
//! callers can substitute an isolated [`MapEnv`] instead of mutating the real
//! process environment.

use std::collections::HashMap;
use std::sync::RwLock;

/// Enables ingest-only mode when set to a truthy value.
pub const INGEST_ONLY_ENV: &str = "OPENCLAW_INGEST_ONLY";

/// Overrides the location of the ingest log file.
pub const INGEST_LOG_PATH_ENV: &str = "OPENCLAW_INGEST_LOG_JSON_PATH";

/// Overrides the state directory.
pub const STATE_DIR_ENV: &str = "OPENCLAW_STATE_DIR";

/// Pre-rename spelling of [`STATE_DIR_ENV`], still honored.
pub const LEGACY_STATE_DIR_ENV: &str = "CLAWDBOT_STATE_DIR";

/// A source of environment variables.
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` if it is unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory environment.
///
/// Values can be changed after construction, which lets tests model a process
/// whose environment is mutated at runtime.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.insert(key.into(), value.into());
    }

    /// Remove `key`.
    pub fn remove(&self, key: &str) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.remove(key);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        let vars = self.vars.read().unwrap_or_else(|e| e.into_inner());
        vars.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for std::sync::Arc<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Parse a boolean-ish string.
///
/// Case-insensitive and whitespace-tolerant. Returns `None` for anything that
/// is neither a recognized truthy nor falsy spelling, including the empty string.
pub fn parse_boolean_value(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Whether an optional environment value is truthy. Unset and unrecognized
/// values are `false`.
pub fn is_truthy_env_value(value: Option<&str>) -> bool {
    value.and_then(parse_boolean_value).unwrap_or(false)
}

/// Read `key`, trimmed. Empty and whitespace-only values count as unset.
pub fn non_empty_var(env: &dyn EnvSource, key: &str) -> Option<String> {
    env.var(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
