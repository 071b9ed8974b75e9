// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for environment-driven configuration.

use std::path::Path;
use std::sync::Arc;

use openclaw_config::{
    is_truthy_env_value, resolve_state_dir_with_home, EnvSource, MapEnv, INGEST_ONLY_ENV,
    STATE_DIR_ENV,
};

/// A shared environment observed through an `Arc` sees later mutations.
#[test]
fn shared_env_reflects_runtime_changes() {
    let env = Arc::new(MapEnv::new());
    let view: Arc<dyn EnvSource> = env.clone();

    assert!(!is_truthy_env_value(view.var(INGEST_ONLY_ENV).as_deref()));

    env.set(INGEST_ONLY_ENV, "on");
    assert!(is_truthy_env_value(view.var(INGEST_ONLY_ENV).as_deref()));
}

/// Relative state dir overrides are returned as given.
#[test]
fn relative_state_dir_is_kept_relative() {
    let env = MapEnv::new().with(STATE_DIR_ENV, "var/state");
    let dir = resolve_state_dir_with_home(&env, Some(Path::new("/home/u")));
    assert_eq!(dir, Path::new("var/state"));
}
