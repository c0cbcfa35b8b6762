// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted scenarios against a pending listeners queue
//!
//! A scenario is a TOML file with an optional `[queue]` table and a list of
//! `[[step]]` entries, each one queue operation:
//!
//! ```toml
//! [queue]
//! dispatch = "per-listener"
//!
//! [[step]]
//! op = "add"
//! index = 1
//! listener = "L1"
//!
//! [[step]]
//! op = "complete"
//! index = 1
//! ```

use sb_allocator::{PendingListenersQueue, QueueConfig, QueueStats};
use sb_core::listener::{self, ListenerResult};
use sb_core::{RoundIndex, TaskExecutor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::oneshot;

/// Errors from loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("listener registered twice: {0}")]
    DuplicateListener(String),
}

/// One queue operation
///
/// Field-less operations are empty struct variants so that stray keys are
/// rejected like any other unknown field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Step {
    Add { index: RoundIndex, listener: String },
    Complete { index: RoundIndex },
    Pause {},
    Resume {},
    NotMaster {},
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parse and validate a scenario from TOML content
    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for name in scenario.listeners() {
            if !seen.insert(name) {
                return Err(ScenarioError::DuplicateListener(name.to_string()));
            }
        }

        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Names of all registered listeners, in step order
    pub fn listeners(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Add { listener, .. } => Some(listener.as_str()),
            _ => None,
        })
    }
}

/// How a listener ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    Converged,
    Failed { reason: String },
    /// Never resolved before the queue was dropped
    Pending,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Converged => write!(f, "converged"),
            Outcome::Failed { reason } => write!(f, "failed: {}", reason),
            Outcome::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListenerOutcome {
    pub listener: String,
    pub index: RoundIndex,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl fmt::Display for ListenerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (round {}): {}", self.listener, self.index, self.outcome)
    }
}

/// Result of running a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Sorted by listener name
    pub outcomes: Vec<ListenerOutcome>,
    /// Queue state after the last step
    pub stats: QueueStats,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(f, "{}", self.stats)
    }
}

/// Run every step against a fresh queue
///
/// The queue is dropped after the last step, so listeners it still holds
/// report [`Outcome::Pending`] instead of waiting forever.
pub async fn run<E: TaskExecutor>(scenario: &Scenario, executor: E) -> Report {
    let queue = PendingListenersQueue::with_config(executor, scenario.queue.clone());
    let mut waiting: BTreeMap<String, (RoundIndex, oneshot::Receiver<ListenerResult>)> =
        BTreeMap::new();

    for (n, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(n, ?step, "applying step");
        match step {
            Step::Add { index, listener: name } => {
                let (tx, rx) = listener::channel();
                queue.add(*index, tx);
                waiting.insert(name.clone(), (*index, rx));
            }
            Step::Complete { index } => queue.complete(*index),
            Step::Pause {} => queue.pause(),
            Step::Resume {} => queue.resume(),
            Step::NotMaster {} => queue.complete_all_as_not_master(),
        }
    }

    let stats = queue.stats();
    drop(queue);

    let mut outcomes = Vec::with_capacity(waiting.len());
    for (name, (index, rx)) in waiting {
        let outcome = match rx.await {
            Ok(Ok(())) => Outcome::Converged,
            Ok(Err(e)) => Outcome::Failed {
                reason: e.to_string(),
            },
            Err(_) => Outcome::Pending,
        };
        outcomes.push(ListenerOutcome {
            listener: name,
            index,
            outcome,
        });
    }

    Report { outcomes, stats }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
