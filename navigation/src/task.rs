//! One-shot asynchronous tasks whose results can be abandoned.
//!
//! The startup session check and pending login requests finish after the
//! view that started them may already be gone. Wrapping them here gives the
//! view a [`TaskGuard`] to cancel from its cleanup hook; a cancelled task
//! resolves to [`Cancelled`] and its result is never applied.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::FutureExt;
use futures::future::{AbortHandle, abortable};

use crate::session::{Session, SessionProvider, SessionStore};

/// The task was cancelled before it produced a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("task cancelled")]
pub struct Cancelled;

/// Cancellation handle for a one-shot task.
#[derive(Clone, Debug)]
pub struct TaskGuard {
    handle: AbortHandle,
}

impl TaskGuard {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Wrap `task` so it can be cancelled through the returned guard.
pub fn one_shot<F>(task: F) -> (TaskGuard, impl Future<Output = Result<F::Output, Cancelled>>)
where
    F: Future,
{
    let (task, handle) = abortable(task);
    (TaskGuard { handle }, task.map(|result| result.map_err(|_| Cancelled)))
}

/// Startup session check: wait out `delay`, then report whether the store
/// holds a login id.
///
/// The store is read after the delay so a login completed in the meantime is
/// not missed.
pub fn session_check<S, D>(store: S, delay: D) -> (TaskGuard, impl Future<Output = Result<bool, Cancelled>>)
where
    S: SessionStore,
    D: Future<Output = ()>,
{
    one_shot(async move {
        delay.await;
        let has_login = Session::new(store).is_authenticated();
        log::debug!("session check: login id present = {has_login}");
        has_login
    })
}
