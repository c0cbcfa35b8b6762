// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pending listener queue configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading queue configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How resolved listeners are packaged for the executor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchMode {
    /// One task per dispatch decision, resolving listeners in order
    #[default]
    Batched,
    /// One task per listener
    PerListener,
}

impl std::fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchMode::Batched => write!(f, "batched"),
            DispatchMode::PerListener => write!(f, "per-listener"),
        }
    }
}

/// Configuration for a [`PendingListenersQueue`](crate::PendingListenersQueue)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueConfig {
    /// Name carried by log spans and stats
    pub name: String,
    pub dispatch: DispatchMode,
}

impl QueueConfig {
    pub const DEFAULT_NAME: &'static str = "desired-balance";

    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_dispatch(self, dispatch: DispatchMode) -> Self {
        Self { dispatch, ..self }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            dispatch: DispatchMode::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
