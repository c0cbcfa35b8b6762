// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared across the round barrier crates

use thiserror::Error;

/// Terminal failure delivered to a round listener
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvergenceError {
    /// The local node stopped being the elected master, so the awaited
    /// round can never be confirmed by this instance
    #[error("no longer master: {reason}")]
    NotMaster { reason: String },
}

impl ConvergenceError {
    pub fn not_master(reason: impl Into<String>) -> Self {
        ConvergenceError::NotMaster {
            reason: reason.into(),
        }
    }

    /// True for failures caused by losing the master role
    pub fn is_not_master(&self) -> bool {
        matches!(self, ConvergenceError::NotMaster { .. })
    }
}

/// Errors from constructing a task executor
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("no tokio runtime is running on this thread")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
