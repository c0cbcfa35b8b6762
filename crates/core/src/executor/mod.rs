// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task execution adapters
//!
//! Resolved listeners are never invoked on the thread that resolved them.
//! They are packaged as tasks and handed to a [`TaskExecutor`].

mod runtime;
mod traced;

pub use runtime::TokioExecutor;
pub use traced::TracedExecutor;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeExecutor;

use std::sync::Arc;

/// Unit of work submitted to an executor
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Capability to run tasks asynchronously
pub trait TaskExecutor: Send + Sync + 'static {
    /// Submit a task. Must not run it inline on the caller's thread.
    fn execute(&self, task: Task);
}

impl<E: TaskExecutor> TaskExecutor for Arc<E> {
    fn execute(&self, task: Task) {
        (**self).execute(task)
    }
}
