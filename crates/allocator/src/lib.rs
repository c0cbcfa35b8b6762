// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shard allocation round barrier
//!
//! Coordinates listeners waiting on desired-balance rounds between the
//! background balance calculator and the allocation controller.

mod config;
mod dispatch;
mod pending;

pub use config::{ConfigError, DispatchMode, QueueConfig};
pub use pending::{PendingListenersQueue, QueueStats, NOT_MASTER_REASON};
