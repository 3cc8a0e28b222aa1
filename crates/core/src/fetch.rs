//! Fetch generation tracking
//!
//! Responses are only applied while their generation is still current, so a
//! slow response from before a reload or navigation is discarded instead of
//! overwriting newer state. Requests themselves are never cancelled; only
//! their results are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter owned by each view service
#[derive(Debug, Default)]
pub struct FetchGeneration(AtomicU64);

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating every fetch started earlier
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while no newer fetch has begun
    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }

    /// Invalidate all in-flight fetches without starting a new one
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Per-slice load indicator
///
/// Pages fetching multiple collections track one state per slice rather
/// than a single global flag, so a page can render partially degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The fetch failed; the slice holds its default (empty) value
    Failed,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_fetch_invalidates_older_one() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn invalidate_discards_in_flight_fetches() {
        let generation = FetchGeneration::new();
        let current = generation.begin();
        generation.invalidate();
        assert!(!generation.is_current(current));
    }
}
