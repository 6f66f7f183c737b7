//! Timers and background work owned by a screen.
//!
//! A [`ScopedTask`] aborts its task when dropped, so replacing or dropping
//! the handle is all it takes to cancel. Anything a task sends after its
//! owner is gone fails on the closed channel instead of reaching stale state.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct ScopedTask {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl ScopedTask {
    pub fn spawn<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            label,
            handle: tokio::spawn(future),
        }
    }

    /// Send `make()` every `period`, first one period from now. Stops once
    /// the receiver is gone.
    pub fn every<M, F>(
        label: &'static str,
        period: Duration,
        sender: UnboundedSender<M>,
        make: F,
    ) -> Self
    where
        M: Send + 'static,
        F: Fn() -> M + Send + 'static,
    {
        Self::spawn(label, async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(make()).is_err() {
                    log::debug!("[ScopedTask] {} receiver closed, stopping", label);
                    break;
                }
            }
        })
    }

    /// Send `message` once after `delay`.
    pub fn after<M>(
        label: &'static str,
        delay: Duration,
        sender: UnboundedSender<M>,
        message: M,
    ) -> Self
    where
        M: Send + 'static,
    {
        Self::spawn(label, async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(message);
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            log::trace!("[ScopedTask] aborting {}", self.label);
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn every_fires_on_period_boundaries() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _task = ScopedTask::every("test", Duration::from_secs(6), tx, || ());

        rx.recv().await.expect("first tick");
        assert_eq!(start.elapsed(), Duration::from_secs(6));
        rx.recv().await.expect("second tick");
        assert_eq!(start.elapsed(), Duration::from_secs(12));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        let task = ScopedTask::after("test", Duration::from_millis(300), tx, 7);
        drop(task);

        tokio::time::sleep(Duration::from_secs(1)).await;
        // the sender was owned by the aborted task
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn after_delivers_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = ScopedTask::after("test", Duration::from_millis(300), tx, "done");
        assert_eq!(rx.recv().await, Some("done"));
        assert_eq!(rx.recv().await, None);
        assert!(task.is_finished());
    }
}
