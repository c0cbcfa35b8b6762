// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pending listeners queue
//!
//! Listeners wait for a round index to converge. The balance calculator and
//! the allocation controller both report completed rounds, possibly out of
//! order, so convergence is tracked as a running maximum (the watermark).
//! A listener is released once its index is at or below the watermark,
//! unless the queue is paused while a cluster-state batch is composed.
//!
//! Listener invocation never happens under the queue lock: resolved
//! listeners are collected under the lock and handed to the executor after
//! it is released.

use crate::config::QueueConfig;
use crate::dispatch::{Dispatcher, Resolution};
use sb_core::{BoxedListener, ConvergenceError, RoundIndex, RoundListener, TaskExecutor};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Reason carried by listeners failed on master role loss
pub const NOT_MASTER_REASON: &str = "local node stepped down as elected master";

/// Watermark, pause flag and pending listeners, guarded together
#[derive(Default)]
struct State {
    completed_index: Option<RoundIndex>,
    paused: bool,
    /// Listeners per index, in registration order within an index
    pending: BTreeMap<RoundIndex, Vec<BoxedListener>>,
}

impl State {
    fn pending_count(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    /// Remove every listener that may be released right now
    fn take_converged(&mut self) -> Vec<BoxedListener> {
        if self.paused {
            return Vec::new();
        }
        let Some(completed) = self.completed_index else {
            return Vec::new();
        };

        let waiting = match completed.successor() {
            Some(next) => self.pending.split_off(&next),
            None => BTreeMap::new(),
        };
        std::mem::replace(&mut self.pending, waiting)
            .into_values()
            .flatten()
            .collect()
    }

    fn take_all(&mut self) -> Vec<BoxedListener> {
        std::mem::take(&mut self.pending)
            .into_values()
            .flatten()
            .collect()
    }
}

/// Point-in-time view of a queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub name: String,
    pub completed_index: Option<RoundIndex>,
    pub paused: bool,
    pub pending: usize,
}

impl std::fmt::Display for QueueStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let completed = match self.completed_index {
            Some(index) => index.to_string(),
            None => "none".to_string(),
        };
        write!(
            f,
            "{}: completed={} paused={} pending={}",
            self.name, completed, self.paused, self.pending
        )
    }
}

/// Pause-gated, monotonic completion barrier for round listeners
pub struct PendingListenersQueue<E> {
    name: String,
    state: Mutex<State>,
    dispatcher: Dispatcher<E>,
}

impl<E: TaskExecutor> PendingListenersQueue<E> {
    /// Create a queue with the default configuration
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, QueueConfig::default())
    }

    pub fn with_config(executor: E, config: QueueConfig) -> Self {
        Self {
            name: config.name,
            state: Mutex::new(State::default()),
            dispatcher: Dispatcher::new(executor, config.dispatch),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a listener for `index`
    ///
    /// If the index has already converged and the queue is not paused, the
    /// listener is dispatched before this returns.
    pub fn add(&self, index: impl Into<RoundIndex>, listener: impl RoundListener) {
        let index = index.into();
        let released = {
            let mut state = self.lock();
            state
                .pending
                .entry(index)
                .or_default()
                .push(Box::new(listener));
            state.take_converged()
        };
        tracing::trace!(queue = %self.name, %index, released = released.len(), "listener added");
        self.dispatcher.dispatch(released, Resolution::Converged);
    }

    /// Report that round `index` has converged
    ///
    /// The watermark only moves forward: a lower or equal index leaves it
    /// unchanged.
    pub fn complete(&self, index: impl Into<RoundIndex>) {
        let index = index.into();
        let (completed, released) = {
            let mut state = self.lock();
            let completed = state.completed_index.map_or(index, |c| c.max(index));
            state.completed_index = Some(completed);
            (completed, state.take_converged())
        };
        tracing::debug!(
            queue = %self.name,
            %index,
            %completed,
            released = released.len(),
            "round completed"
        );
        self.dispatcher.dispatch(released, Resolution::Converged);
    }

    /// Hold converged listeners until [`resume`](Self::resume)
    pub fn pause(&self) {
        self.lock().paused = true;
        tracing::debug!(queue = %self.name, "paused");
    }

    /// Release listeners held while paused
    pub fn resume(&self) {
        let released = {
            let mut state = self.lock();
            state.paused = false;
            state.take_converged()
        };
        tracing::debug!(queue = %self.name, released = released.len(), "resumed");
        self.dispatcher.dispatch(released, Resolution::Converged);
    }

    pub fn is_paused(&self) -> bool {
        self.lock().paused
    }

    /// Fail every pending listener because this node lost the master role
    ///
    /// Applies regardless of pause state and watermark. The watermark is
    /// kept and the queue stays usable for listeners added afterwards.
    pub fn complete_all_as_not_master(&self) {
        let failed = self.lock().take_all();
        tracing::info!(queue = %self.name, failed = failed.len(), "failing pending listeners, no longer master");
        self.dispatcher.dispatch(
            failed,
            Resolution::Failed(ConvergenceError::not_master(NOT_MASTER_REASON)),
        );
    }

    /// Highest round reported complete so far
    pub fn completed_index(&self) -> Option<RoundIndex> {
        self.lock().completed_index
    }

    /// Number of listeners not yet resolved
    pub fn pending_count(&self) -> usize {
        self.lock().pending_count()
    }

    pub fn stats(&self) -> QueueStats {
        let state = self.lock();
        QueueStats {
            name: self.name.clone(),
            completed_index: state.completed_index,
            paused: state.paused,
            pending: state.pending_count(),
        }
    }

    // No user code runs under this lock, so a poisoned state is still consistent
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod tests;
