// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokio-backed executor

use super::{Task, TaskExecutor};
use crate::error::ExecutorError;
use tokio::runtime::Handle;

/// Runs tasks on a tokio runtime's blocking pool
///
/// Listener code is synchronous and may block, so tasks go to
/// `spawn_blocking` rather than onto the async worker threads.
#[derive(Clone, Debug)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Executor bound to the runtime running on the current thread
    pub fn try_current() -> Result<Self, ExecutorError> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl TaskExecutor for TokioExecutor {
    fn execute(&self, task: Task) {
        // Detached: the outcome travels through the listener, not the handle
        drop(self.handle.spawn_blocking(task));
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
