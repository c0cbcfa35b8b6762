// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! sb-core: shared building blocks for the shard balance round barrier
//!
//! This crate provides:
//! - Round indices
//! - Two-path round listeners (converged / failed)
//! - Task executors that run resolved listeners off the caller's thread

pub mod error;
pub mod executor;
pub mod listener;
pub mod round;

pub use error::{ConvergenceError, ExecutorError};
pub use executor::{Task, TaskExecutor, TokioExecutor, TracedExecutor};
pub use listener::{BoxedListener, ListenerResult, RoundListener};
pub use round::RoundIndex;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use executor::FakeExecutor;
