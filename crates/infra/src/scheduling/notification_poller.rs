//! Periodic notification poller
//!
//! Refreshes the notification feed once at startup and then on a fixed
//! cadence. After consecutive failed fetches the gap to the next tick
//! doubles, up to a ceiling; a failed fetch is never re-issued early. The
//! first success snaps the cadence back to the base interval.

use std::sync::Arc;
use std::time::Duration;

use brick_common::BackoffStrategy;
use brick_core::NotificationFeedService;
use brick_domain::constants::{DEFAULT_POLL_INTERVAL_SECS, MAX_POLL_BACKOFF_MULTIPLIER};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use super::{SchedulerError, SchedulerResult};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the notification poller
#[derive(Debug, Clone)]
pub struct NotificationPollerConfig {
    /// Base interval between fetches
    pub interval: Duration,
    /// Cap on the backoff as a multiple of the base interval
    pub max_backoff_multiplier: u32,
    /// How long `stop` waits for the task to finish
    pub join_timeout: Duration,
}

impl Default for NotificationPollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_backoff_multiplier: MAX_POLL_BACKOFF_MULTIPLIER,
            join_timeout: Duration::from_secs(5),
        }
    }
}

impl NotificationPollerConfig {
    /// Delay before the next tick given the current failure streak
    fn delay_after(&self, consecutive_failures: u32) -> Duration {
        BackoffStrategy::Exponential {
            initial_delay: self.interval,
            base: 2.0,
            max_delay: self.interval * self.max_backoff_multiplier,
        }
        .calculate_delay(consecutive_failures)
    }
}

/// Background poller driving [`NotificationFeedService::refresh`]
pub struct NotificationPoller {
    feed: Arc<NotificationFeedService>,
    config: NotificationPollerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl NotificationPoller {
    pub fn new(feed: Arc<NotificationFeedService>, config: NotificationPollerConfig) -> Self {
        Self {
            feed,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the poller
    ///
    /// Fetches once immediately, then keeps polling in the background.
    ///
    /// # Errors
    ///
    /// Returns error if the poller is already running.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!(interval = ?self.config.interval, "Starting notification poller");

        // Fresh token so the poller can be restarted after stop
        self.cancellation_token = CancellationToken::new();

        let feed = Arc::clone(&self.feed);
        let config = self.config.clone();
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            Self::poll_loop(feed, config, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        Ok(())
    }

    /// Stop the poller gracefully
    ///
    /// # Errors
    ///
    /// Returns error if the poller is not running or does not shut down
    /// within the join timeout.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        info!("Stopping notification poller");

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            tokio::time::timeout(self.config.join_timeout, handle)
                .await
                .map_err(|_| SchedulerError::Timeout(self.config.join_timeout))?
                .map_err(|e| SchedulerError::TaskJoinFailed(e.to_string()))?;
        }

        info!("Notification poller stopped");
        Ok(())
    }

    /// Check if the poller is running
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    async fn poll_loop(
        feed: Arc<NotificationFeedService>,
        config: NotificationPollerConfig,
        cancel: CancellationToken,
    ) {
        // Immediate fetch so the bell is populated right after login
        feed.refresh().await;

        loop {
            let delay = config.delay_after(feed.consecutive_failures());
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Poll loop cancelled");
                    break;
                }
                _ = tokio::time::sleep(delay) => {
                    feed.refresh().await;
                }
            }
        }
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use async_trait::async_trait;
    use brick_core::{NotificationGateway, UiSignal};
    use brick_domain::{BrickError, NotificationFeed, Result};

    use super::*;

    #[derive(Default)]
    struct CountingGateway {
        fetches: AtomicU32,
        fail: AtomicBool,
    }

    #[async_trait]
    impl NotificationGateway for CountingGateway {
        async fn feed(&self) -> Result<NotificationFeed> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(BrickError::Network("down".into()));
            }
            Ok(NotificationFeed::default())
        }

        async fn mark_read(&self, _id: &str) -> Result<()> {
            Ok(())
        }

        async fn mark_all_read(&self) -> Result<()> {
            Ok(())
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    struct NullSignal;

    impl UiSignal for NullSignal {
        fn success(&self, _message: &str) {}
        fn info(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    fn poller(
        gateway: Arc<CountingGateway>,
        interval: Duration,
    ) -> (NotificationPoller, Arc<NotificationFeedService>) {
        let feed = Arc::new(NotificationFeedService::new(gateway, Arc::new(NullSignal)));
        let config = NotificationPollerConfig {
            interval,
            max_backoff_multiplier: 8,
            join_timeout: Duration::from_secs(5),
        };
        (NotificationPoller::new(Arc::clone(&feed), config), feed)
    }

    #[test]
    fn backoff_doubles_per_failure_up_to_the_ceiling() {
        let config = NotificationPollerConfig {
            interval: Duration::from_secs(30),
            max_backoff_multiplier: 8,
            join_timeout: Duration::from_secs(5),
        };
        assert_eq!(config.delay_after(0), Duration::from_secs(30));
        assert_eq!(config.delay_after(1), Duration::from_secs(60));
        assert_eq!(config.delay_after(2), Duration::from_secs(120));
        assert_eq!(config.delay_after(3), Duration::from_secs(240));
        // Ceiling holds however long the outage lasts
        assert_eq!(config.delay_after(10), Duration::from_secs(240));
    }

    #[tokio::test(start_paused = true)]
    async fn polls_immediately_and_then_on_the_interval() {
        let gateway = Arc::new(CountingGateway::default());
        let (mut poller, _feed) = poller(Arc::clone(&gateway), Duration::from_secs(30));

        poller.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 3);

        poller.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failures_stretch_the_gap_until_recovery() {
        let gateway = Arc::new(CountingGateway::default());
        gateway.fail.store(true, Ordering::SeqCst);
        let (mut poller, feed) = poller(Arc::clone(&gateway), Duration::from_secs(30));

        poller.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
        assert!(feed.is_degraded());

        // One failure on the books: next tick comes after 60s, not 30s
        tokio::time::sleep(Duration::from_secs(45)).await;
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);

        // Recovery resets the streak and the cadence
        gateway.fail.store(false, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(125)).await;
        assert!(!feed.is_degraded());
        tokio::time::sleep(Duration::from_secs(35)).await;
        let after_recovery = gateway.fetches.load(Ordering::SeqCst);
        assert!(after_recovery >= 4);

        poller.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_polling_and_start_errors_while_running() {
        let gateway = Arc::new(CountingGateway::default());
        let (mut poller, _feed) = poller(Arc::clone(&gateway), Duration::from_secs(30));

        poller.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(poller.is_running());
        assert!(matches!(poller.start().await, Err(SchedulerError::AlreadyRunning)));

        poller.stop().await.unwrap();
        assert!(!poller.is_running());
        let stopped_at = gateway.fetches.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), stopped_at);

        assert!(matches!(poller.stop().await, Err(SchedulerError::NotRunning)));
    }
}
