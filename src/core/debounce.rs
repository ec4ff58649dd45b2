//! Trailing-edge debouncing of rapidly changing input.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Delays a commit until no new value has been pushed for `delay`.
///
/// Every `push` cancels the pending timer and starts a new one, so only the
/// last value of a burst is committed. The pending timer is cancelled when
/// the debouncer is dropped.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `on_commit(value)` after the quiet period.
    ///
    /// Outside a tokio runtime there is no timer to wait on and the value is
    /// committed immediately.
    pub fn push<T, F>(&mut self, value: T, on_commit: F)
    where
        T: Send + 'static,
        F: FnOnce(T) + Send + 'static,
    {
        self.cancel();

        let Ok(handle) = Handle::try_current() else {
            tracing::warn!("No async runtime available, committing debounced value immediately");
            on_commit(value);
            return;
        };

        let delay = self.delay;
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            on_commit(value);
        }));
    }

    /// Drops the pending commit, if any. Returns `true` if one was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn() -> Box<dyn FnOnce(String) + Send>) {
        let commits = Arc::new(Mutex::new(Vec::new()));
        let sink = commits.clone();
        let make = move || {
            let sink = sink.clone();
            Box::new(move |v: String| sink.lock().unwrap().push(v)) as Box<dyn FnOnce(String) + Send>
        };
        (commits, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_commits_only_the_last_value() {
        let (commits, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for text in ["e", "er", "eri", "eric"] {
            debouncer.push(text.to_string(), make());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(commits.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*commits.lock().unwrap(), vec!["eric".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_longer_than_delay_commit_each_value() {
        let (commits, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("first".to_string(), make());
        tokio::time::sleep(Duration::from_millis(350)).await;
        debouncer.push("second".to_string(), make());
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(*commits.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop_discard_pending_commit() {
        let (commits, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("cancelled".to_string(), make());
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        debouncer.push("dropped".to_string(), make());
        drop(debouncer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(commits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_without_runtime_commits_immediately() {
        let (commits, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.push("now".to_string(), make());
        assert_eq!(*commits.lock().unwrap(), vec!["now"]);
        assert!(!debouncer.is_pending());
    }
}
