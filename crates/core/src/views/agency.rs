//! Agency dashboard: unified cross-agency client list

use std::sync::{Arc, RwLock};

use brick_domain::UnifiedClientList;
use tracing::debug;

use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::CaseworkGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct AgencyState {
    unified: Option<UnifiedClientList>,
    load: LoadState,
}

pub struct AgencyService {
    gateway: Arc<dyn CaseworkGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<AgencyState>,
    generation: FetchGeneration,
}

impl AgencyService {
    pub fn new(gateway: Arc<dyn CaseworkGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(AgencyState::default()),
            generation: FetchGeneration::new(),
        }
    }

    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        self.write().load = LoadState::Loading;

        let result = self.gateway.unified_clients().await;
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale unified client response");
            return;
        }

        match result {
            Ok(unified) => {
                state.unified = Some(unified);
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.unified = None;
                state.load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load unified client list");
                self.signals.error("Failed to load the client list");
            }
        }
    }

    pub fn unified_clients(&self) -> Option<UnifiedClientList> {
        self.read().unified
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load
    }

    fn read(&self) -> AgencyState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, AgencyState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
