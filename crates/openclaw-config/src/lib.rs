// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-driven configuration for OpenClaw.
//!
//! Provides the [`EnvSource`] seam used to read `OPENCLAW_*` variables, the
//! shared truthy/falsy flag convention, and state directory resolution.
//!
//! # Usage
//!
//! ```
//! use openclaw_config::{is_truthy_env_value, EnvSource, MapEnv, INGEST_ONLY_ENV};
//!
//! let env = MapEnv::new().with(INGEST_ONLY_ENV, "yes");
//! assert!(is_truthy_env_value(env.var(INGEST_ONLY_ENV).as_deref()));
//! ```

pub mod env;
pub mod paths;

pub use env::{
    is_truthy_env_value, non_empty_var, parse_boolean_value, EnvSource, MapEnv, ProcessEnv,
    INGEST_LOG_PATH_ENV, INGEST_ONLY_ENV, LEGACY_STATE_DIR_ENV, STATE_DIR_ENV,
};
pub use paths::{expand_home, resolve_state_dir, resolve_state_dir_with_home};
