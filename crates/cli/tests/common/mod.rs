// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A scenario file living in its own temporary directory
pub struct ScenarioFile {
    // Held so the directory outlives the test
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write scenario content to a fresh temporary file
pub fn scenario(content: &str) -> ScenarioFile {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("scenario.toml");
    std::fs::write(&path, content).expect("Failed to write scenario");
    ScenarioFile { _dir: dir, path }
}

/// Controller pauses, the calculator converges round 2 ahead of the
/// controller's older round 1, then the controller resumes
pub const ADVANCE_ONLY: &str = r#"
[[step]]
op = "pause"

[[step]]
op = "add"
index = 2
listener = "L"

[[step]]
op = "complete"
index = 2

[[step]]
op = "complete"
index = 1

[[step]]
op = "resume"
"#;

/// Two listeners, one completion suppressed by a pause, then master loss
pub const MASTER_LOSS: &str = r#"
[[step]]
op = "add"
index = 1
listener = "L1"

[[step]]
op = "add"
index = 2
listener = "L2"

[[step]]
op = "pause"

[[step]]
op = "complete"
index = 1

[[step]]
op = "not-master"
"#;
