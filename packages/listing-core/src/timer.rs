//! Delayed continuations tied to the lifetime of their owner.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A continuation that runs once after a delay, unless cancelled first.
///
/// Dropping the timer cancels it. Cancellation also interrupts a continuation
/// that has already started, so nothing it would have touched is updated
/// after the owner is gone.
#[derive(Debug)]
pub struct ScopedTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScopedTimer {
    /// Spawn `task` on the current tokio runtime, cancellable from here.
    pub fn spawn<Fut>(task: Fut) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    debug!("scoped task cancelled");
                }
                _ = task => {}
            }
        });

        Self { token, handle }
    }

    /// Run `continuation` once `delay` has elapsed.
    pub fn schedule<F, Fut>(delay: Duration, continuation: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::spawn(async move {
            tokio::time::sleep(delay).await;
            continuation().await;
        })
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the task has finished, by firing or by cancellation.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
