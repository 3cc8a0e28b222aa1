//! Cleanup crew dashboard: sweep schedule
//!
//! Posting a sweep fans out notifications to affected clients server-side;
//! the client only posts the schedule and re-fetches.

use std::sync::{Arc, RwLock};

use brick_domain::{CleanupSweep, CleanupSweepCreate, Result};
use tracing::debug;

use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::SweepGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct SweepState {
    sweeps: Vec<CleanupSweep>,
    load: LoadState,
}

pub struct SweepService {
    gateway: Arc<dyn SweepGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<SweepState>,
    generation: FetchGeneration,
}

impl SweepService {
    pub fn new(gateway: Arc<dyn SweepGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(SweepState::default()),
            generation: FetchGeneration::new(),
        }
    }

    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        self.write().load = LoadState::Loading;

        let result = self.gateway.sweeps().await;
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale sweeps response");
            return;
        }

        match result {
            Ok(sweeps) => {
                state.sweeps = sweeps;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.sweeps = Vec::new();
                state.load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load sweeps");
                self.signals.error("Failed to load the sweep schedule");
            }
        }
    }

    pub fn sweeps(&self) -> Vec<CleanupSweep> {
        self.read().sweeps
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load
    }

    /// `POST /cleanup/sweeps`, then re-fetch
    pub async fn post_sweep(&self, sweep: &CleanupSweepCreate) -> Result<()> {
        match self.gateway.post_sweep(sweep).await {
            Ok(_) => {
                self.signals.success("Sweep posted. Affected clients will be notified.");
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to post sweep");
                Err(err)
            }
        }
    }

    fn read(&self) -> SweepState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SweepState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
