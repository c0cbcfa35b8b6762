// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured log output of the pending listeners queue

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use sb_allocator::{PendingListenersQueue, QueueConfig};
use sb_core::{listener, FakeExecutor};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a closure with captured tracing output
fn with_tracing<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn complete_logs_watermark_and_release_count() {
    let executor = FakeExecutor::new();
    let queue = PendingListenersQueue::new(executor);

    let logs = with_tracing(|| {
        queue.add(1, listener::on_either(|| {}));
        queue.complete(3);
        queue.complete(2);
    });

    assert!(logs.contains("round completed"), "logs: {}", logs);
    assert!(logs.contains("completed=3"), "logs: {}", logs);
    assert!(logs.contains("released=1"), "logs: {}", logs);
    assert!(logs.contains("queue=desired-balance"), "logs: {}", logs);
}

#[test]
fn teardown_logs_failed_count_at_info() {
    let executor = FakeExecutor::new();
    let queue =
        PendingListenersQueue::with_config(executor, QueueConfig::default().with_name("failover"));

    let logs = with_tracing(|| {
        queue.add(1, listener::on_either(|| {}));
        queue.add(2, listener::on_either(|| {}));
        queue.complete_all_as_not_master();
    });

    let line = logs
        .lines()
        .find(|l| l.contains("no longer master"))
        .expect("teardown was not logged");
    assert!(line.contains("INFO"), "line: {}", line);
    assert!(line.contains("failed=2"), "line: {}", line);
    assert!(line.contains("queue=failover"), "line: {}", line);
}

#[test]
fn dispatch_logs_mode_and_outcome() {
    let executor = FakeExecutor::new();
    let queue = PendingListenersQueue::new(executor);

    let logs = with_tracing(|| {
        queue.add(1, listener::on_either(|| {}));
        queue.pause();
        queue.complete(1);
        queue.resume();
    });

    assert!(logs.contains("paused"), "logs: {}", logs);
    assert!(logs.contains("resumed"), "logs: {}", logs);
    assert!(logs.contains("dispatching listeners"), "logs: {}", logs);
    assert!(logs.contains("mode=batched"), "logs: {}", logs);
    assert!(logs.contains("outcome=\"converged\""), "logs: {}", logs);
}
