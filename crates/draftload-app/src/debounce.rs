//! Single-slot debouncer
//!
//! Holds at most one pending delayed publish. Scheduling a new value aborts the
//! pending one, so only the last value of a burst reaches subscribers, `delay`
//! after the burst ends. Must be used from inside a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    delay: Duration,
    sender: Arc<watch::Sender<T>>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + Sync + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver that sees settled values
    pub fn new(delay: Duration, initial: T) -> (Self, watch::Receiver<T>) {
        let (sender, receiver) = watch::channel(initial);
        let debouncer = Self {
            delay,
            sender: Arc::new(sender),
            pending: None,
        };
        (debouncer, receiver)
    }

    /// Publish `value` after the delay unless another value is scheduled first
    pub fn schedule(&mut self, value: T) {
        self.cancel();
        let sender = Arc::clone(&self.sender);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sender.send_replace(value);
        }));
    }

    /// Publish `value` now, dropping anything pending
    pub fn publish_now(&mut self, value: T) {
        self.cancel();
        self.sender.send_replace(value);
    }

    /// Abort the pending publish. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
