use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Coalesces a rapidly changing value into a single emission once the
/// input has been quiet for the configured delay.
///
/// Each `feed` aborts the previous pending emission (timer reset, not
/// queued). Dropping the debouncer aborts the pending timer so nothing
/// emits after the consumer is gone. A zero delay degrades to a
/// synchronous passthrough.
pub struct Debouncer<T> {
    delay: Duration,
    runtime: Handle,
    out: mpsc::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, runtime: Handle, out: mpsc::Sender<T>) -> Self {
        Self {
            delay,
            runtime,
            out,
            pending: None,
        }
    }

    pub fn feed(&mut self, value: T) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }

        if self.delay.is_zero() {
            let _ = self.out.send(value);
            return;
        }

        let delay = self.delay;
        let out = self.out.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = out.send(value);
        }));
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
