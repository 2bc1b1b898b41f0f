//! Single in-flight remote call per form.
//!
//! A form is either idle or submitting. [`Submission::start`] refuses to
//! start a second call while one is in flight, and the busy flag clears as
//! soon as the outcome is collected, whatever it was.

use crate::api::ApiError;
use crate::widgets::toast::{Toast, ToastManager};
use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, warn};

/// Outcome of one remote call.
pub type Outcome<T> = Result<T, ApiError>;

/// Tracks the remote call a form has in flight.
#[derive(Debug)]
pub struct Submission<T> {
    in_flight: Option<oneshot::Receiver<Outcome<T>>>,
}

impl<T> Default for Submission<T> {
    fn default() -> Self {
        Self { in_flight: None }
    }
}

impl<T: Send + 'static> Submission<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a call is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Spawn `call` on the runtime.
    ///
    /// Returns `false` without doing anything if a call is already in flight.
    pub fn start<F>(&mut self, runtime: &Handle, call: F) -> bool
    where
        F: Future<Output = Outcome<T>> + Send + 'static,
    {
        if self.is_busy() {
            debug!("Submission already in flight, ignoring");
            return false;
        }

        let (tx, rx) = oneshot::channel();
        runtime.spawn(async move {
            // The receiver is gone only if the form was dropped; nothing to report to.
            let _ = tx.send(call.await);
        });
        self.in_flight = Some(rx);
        true
    }

    /// Collect the outcome if the call has settled. Never blocks.
    pub fn poll(&mut self) -> Option<Outcome<T>> {
        let rx = self.in_flight.as_mut()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                warn!("Submission task ended without an outcome");
                self.in_flight = None;
                Some(Err(ApiError::Aborted))
            }
        }
    }

    /// Wait for the in-flight call to settle.
    ///
    /// Returns `None` when nothing was in flight.
    pub async fn settle(&mut self) -> Option<Outcome<T>> {
        let rx = self.in_flight.take()?;
        Some(rx.await.unwrap_or_else(|_| {
            warn!("Submission task ended without an outcome");
            Err(ApiError::Aborted)
        }))
    }
}

/// Show the failure of a remote call, falling back to the form's own message.
pub fn report_failure(toasts: &mut ToastManager, err: &ApiError, fallback: &str) {
    let message = err.user_message().unwrap_or_else(|| fallback.to_string());
    toasts.push(Toast::error(message));
}
