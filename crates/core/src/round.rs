// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Round indices
//!
//! Both the balance calculator and the allocation controller number their
//! work from one externally maintained, monotonically increasing sequence.
//! Indices carry no meaning beyond their position in that sequence.

use serde::{Deserialize, Serialize};

/// Position of a computation or application round in the round sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundIndex(pub i64);

impl RoundIndex {
    /// The index immediately after this one, if representable
    pub fn successor(self) -> Option<RoundIndex> {
        self.0.checked_add(1).map(RoundIndex)
    }
}

impl std::fmt::Display for RoundIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RoundIndex {
    fn from(index: i64) -> Self {
        RoundIndex(index)
    }
}

// Unsuffixed integer literals default to i32
impl From<i32> for RoundIndex {
    fn from(index: i32) -> Self {
        RoundIndex(i64::from(index))
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod tests;
