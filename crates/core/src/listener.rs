// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-path round listeners
//!
//! A listener is told exactly one thing about the round it waits for:
//! either the round converged, or it never will. Both paths consume the
//! listener, so a single listener cannot be resolved twice.

use crate::error::ConvergenceError;
use tokio::sync::oneshot;

/// Outcome delivered through a channel listener
pub type ListenerResult = Result<(), ConvergenceError>;

/// Callback waiting for a round to converge
pub trait RoundListener: Send + 'static {
    /// The round (or a later one) has been confirmed
    fn on_converged(self: Box<Self>);

    /// The round can never be confirmed
    fn on_failure(self: Box<Self>, error: ConvergenceError);
}

/// Type-erased listener as stored by pending queues
pub type BoxedListener = Box<dyn RoundListener>;

// Lets already-boxed listeners be passed where `impl RoundListener` is taken
impl RoundListener for BoxedListener {
    fn on_converged(self: Box<Self>) {
        (*self).on_converged()
    }

    fn on_failure(self: Box<Self>, error: ConvergenceError) {
        (*self).on_failure(error)
    }
}

/// Listener built from a pair of closures
pub struct FnListener<S, F> {
    on_converged: S,
    on_failure: F,
}

impl<S, F> RoundListener for FnListener<S, F>
where
    S: FnOnce() + Send + 'static,
    F: FnOnce(ConvergenceError) + Send + 'static,
{
    fn on_converged(self: Box<Self>) {
        (self.on_converged)()
    }

    fn on_failure(self: Box<Self>, error: ConvergenceError) {
        (self.on_failure)(error)
    }
}

/// Build a listener from a success closure and a failure closure
pub fn wrap<S, F>(on_converged: S, on_failure: F) -> FnListener<S, F>
where
    S: FnOnce() + Send + 'static,
    F: FnOnce(ConvergenceError) + Send + 'static,
{
    FnListener {
        on_converged,
        on_failure,
    }
}

/// Listener that runs the same closure whatever the outcome
pub struct EitherListener<R> {
    run: R,
}

impl<R> RoundListener for EitherListener<R>
where
    R: FnOnce() + Send + 'static,
{
    fn on_converged(self: Box<Self>) {
        (self.run)()
    }

    fn on_failure(self: Box<Self>, error: ConvergenceError) {
        tracing::trace!(error = %error, "listener resolved with failure");
        (self.run)()
    }
}

/// Build a listener that runs `run` on either outcome
pub fn on_either<R>(run: R) -> EitherListener<R>
where
    R: FnOnce() + Send + 'static,
{
    EitherListener { run }
}

// A dropped receiver just means nobody is waiting anymore.
impl RoundListener for oneshot::Sender<ListenerResult> {
    fn on_converged(self: Box<Self>) {
        let _ = (*self).send(Ok(()));
    }

    fn on_failure(self: Box<Self>, error: ConvergenceError) {
        let _ = (*self).send(Err(error));
    }
}

/// Create a listener whose outcome can be awaited through the receiver
///
/// If the listener is dropped without being resolved (for instance when the
/// queue holding it is dropped), the receiver reports a closed channel.
pub fn channel() -> (oneshot::Sender<ListenerResult>, oneshot::Receiver<ListenerResult>) {
    oneshot::channel()
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
