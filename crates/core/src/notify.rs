//! Notification feed state
//!
//! Refreshed by the infra poller on a fixed cadence. A failed refresh is
//! never surfaced as an error; the feed flips to a degraded indicator and
//! keeps whatever it last saw, and the poller stretches its next tick.
//! Mutations follow the fetch-after-write rule like every other page.

use std::sync::{Arc, RwLock};

use brick_domain::{Notification, Result};
use tracing::debug;

use crate::gateway_ports::NotificationGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct FeedState {
    notifications: Vec<Notification>,
    unread_count: u32,
    degraded: bool,
    consecutive_failures: u32,
}

/// Keeps the unread-count indicator current
pub struct NotificationFeedService {
    gateway: Arc<dyn NotificationGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<FeedState>,
}

impl NotificationFeedService {
    pub fn new(gateway: Arc<dyn NotificationGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self { gateway, signals, state: RwLock::new(FeedState::default()) }
    }

    /// Fetch the feed once
    ///
    /// Success resets the degraded indicator and the failure streak; any
    /// failure increments the streak and flags the feed degraded without
    /// touching the last good data.
    pub async fn refresh(&self) {
        match self.gateway.feed().await {
            Ok(feed) => {
                let mut state = self.write_state();
                state.notifications = feed.notifications;
                state.unread_count = feed.unread_count;
                state.degraded = false;
                state.consecutive_failures = 0;
            }
            Err(err) => {
                let mut state = self.write_state();
                state.consecutive_failures += 1;
                state.degraded = true;
                debug!(
                    error = %err,
                    failures = state.consecutive_failures,
                    "Notification refresh failed"
                );
            }
        }
    }

    /// `PATCH /notifications/{id}/read`, then re-fetch
    pub async fn mark_read(&self, id: &str) -> Result<()> {
        match self.gateway.mark_read(id).await {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to mark as read");
                Err(err)
            }
        }
    }

    /// `PATCH /notifications/read-all`, then re-fetch
    pub async fn mark_all_read(&self) -> Result<()> {
        match self.gateway.mark_all_read().await {
            Ok(()) => {
                self.refresh().await;
                self.signals.success("All notifications marked as read");
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to mark all as read");
                Err(err)
            }
        }
    }

    /// `DELETE /notifications/{id}`, then re-fetch
    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to delete notification");
                Err(err)
            }
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.read_state().notifications.clone()
    }

    pub fn unread_count(&self) -> u32 {
        self.read_state().unread_count
    }

    /// True while the last refresh failed
    pub fn is_degraded(&self) -> bool {
        self.read_state().degraded
    }

    /// Failure streak length, consumed by the poller's backoff
    pub fn consecutive_failures(&self) -> u32 {
        self.read_state().consecutive_failures
    }

    fn read_state(&self) -> FeedState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, FeedState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
