// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced executor wrapper for consistent observability

use super::{Task, TaskExecutor};

/// Wrapper that adds tracing to any TaskExecutor
#[derive(Clone, Debug)]
pub struct TracedExecutor<E> {
    inner: E,
    name: &'static str,
}

impl<E> TracedExecutor<E> {
    pub fn new(inner: E, name: &'static str) -> Self {
        Self { inner, name }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: TaskExecutor> TaskExecutor for TracedExecutor<E> {
    fn execute(&self, task: Task) {
        let name = self.name;
        tracing::trace!(executor = name, "task submitted");

        self.inner.execute(Box::new(move || {
            let span = tracing::debug_span!("executor.task", executor = name);
            let _guard = span.enter();

            let start = std::time::Instant::now();
            task();
            tracing::debug!(
                elapsed_us = start.elapsed().as_micros() as u64,
                "task finished"
            );
        }));
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
