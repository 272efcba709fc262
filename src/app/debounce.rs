use std::future::Future;
use std::time::Duration;

use tokio::{task::JoinHandle, time::sleep};

/// Delays a callback until its input has been stable for the configured
/// interval. Re-arming cancels the pending callback (last write wins);
/// dropping the debouncer cancels it too, so a torn-down owner can never be
/// called back.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            callback.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
