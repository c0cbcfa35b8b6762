// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hands resolved listeners to the executor

use crate::config::DispatchMode;
use sb_core::{BoxedListener, ConvergenceError, TaskExecutor};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// How a batch of listeners is resolved
#[derive(Debug, Clone)]
pub(crate) enum Resolution {
    Converged,
    Failed(ConvergenceError),
}

impl Resolution {
    fn name(&self) -> &'static str {
        match self {
            Resolution::Converged => "converged",
            Resolution::Failed(_) => "failed",
        }
    }

    fn resolve(&self, listener: BoxedListener) {
        match self {
            Resolution::Converged => listener.on_converged(),
            Resolution::Failed(error) => listener.on_failure(error.clone()),
        }
    }

    /// Resolve one listener of a batch; a panicking listener must not
    /// leave the rest of the batch unresolved
    fn resolve_isolated(&self, listener: BoxedListener) {
        if catch_unwind(AssertUnwindSafe(|| self.resolve(listener))).is_err() {
            tracing::error!(outcome = self.name(), "listener panicked during resolution");
        }
    }
}

/// Packages listeners into executor tasks
///
/// Callers must release the queue lock before dispatching, so listener code
/// that re-enters the queue never contends with its own dispatch.
pub(crate) struct Dispatcher<E> {
    executor: E,
    mode: DispatchMode,
}

impl<E: TaskExecutor> Dispatcher<E> {
    pub(crate) fn new(executor: E, mode: DispatchMode) -> Self {
        Self { executor, mode }
    }

    pub(crate) fn dispatch(&self, listeners: Vec<BoxedListener>, resolution: Resolution) {
        if listeners.is_empty() {
            return;
        }

        tracing::debug!(
            count = listeners.len(),
            mode = %self.mode,
            outcome = resolution.name(),
            "dispatching listeners"
        );

        match self.mode {
            DispatchMode::Batched => self.executor.execute(Box::new(move || {
                for listener in listeners {
                    resolution.resolve_isolated(listener);
                }
            })),
            DispatchMode::PerListener => {
                for listener in listeners {
                    let resolution = resolution.clone();
                    self.executor
                        .execute(Box::new(move || resolution.resolve(listener)));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
