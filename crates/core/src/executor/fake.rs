// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake executor for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Task, TaskExecutor};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Executor that holds tasks until the test runs them
///
/// Clones share the same task queue.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    tasks: Arc<Mutex<VecDeque<Task>>>,
    submitted: Arc<Mutex<usize>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run
    pub fn queued(&self) -> usize {
        self.tasks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Total number of tasks ever submitted
    pub fn submitted(&self) -> usize {
        *self.submitted.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run queued tasks, including any they submit, until none remain.
    /// Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        // Lock is released before each task runs, tasks may submit more
        while let Some(task) = self.pop() {
            task();
            ran += 1;
        }
        ran
    }

    fn pop(&self) -> Option<Task> {
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
    }
}

impl TaskExecutor for FakeExecutor {
    fn execute(&self, task: Task) {
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(task);
        *self.submitted.lock().unwrap_or_else(|e| e.into_inner()) += 1;
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
