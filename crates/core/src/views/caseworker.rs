//! Caseworker dashboard: client roster and HUD compliance report
//!
//! The two collections are independent and load concurrently; each slice
//! keeps its own load state so the dashboard renders partially when one
//! fetch fails.

use std::sync::{Arc, RwLock};

use brick_domain::{HudReport, User};
use tracing::debug;

use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::CaseworkGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct CaseworkerState {
    clients: Vec<User>,
    clients_load: LoadState,
    hud_report: Option<HudReport>,
    report_load: LoadState,
}

pub struct CaseworkerService {
    gateway: Arc<dyn CaseworkGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<CaseworkerState>,
    generation: FetchGeneration,
}

impl CaseworkerService {
    pub fn new(gateway: Arc<dyn CaseworkGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(CaseworkerState::default()),
            generation: FetchGeneration::new(),
        }
    }

    /// Load clients and the HUD report concurrently
    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        {
            let mut state = self.write();
            state.clients_load = LoadState::Loading;
            state.report_load = LoadState::Loading;
        }

        let (clients, report) = tokio::join!(self.gateway.clients(), self.gateway.hud_report());

        // Checked under the write lock so a newer refresh completing between
        // the join and the writes is never overwritten.
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale caseworker response");
            return;
        }

        let mut clients_error = None;
        match clients {
            Ok(clients) => {
                state.clients = clients;
                state.clients_load = LoadState::Ready;
            }
            Err(err) => {
                state.clients = Vec::new();
                state.clients_load = LoadState::Failed;
                debug!(error = %err, "Failed to load clients");
                clients_error = Some("Failed to load clients");
            }
        }

        let mut report_error = None;
        match report {
            Ok(report) => {
                state.hud_report = Some(report);
                state.report_load = LoadState::Ready;
            }
            Err(err) => {
                state.hud_report = None;
                state.report_load = LoadState::Failed;
                debug!(error = %err, "Failed to load HUD report");
                report_error = Some("Failed to load the HUD report");
            }
        }
        drop(state);

        if let Some(message) = clients_error {
            self.signals.error(message);
        }
        if let Some(message) = report_error {
            self.signals.error(message);
        }
    }

    pub fn clients(&self) -> Vec<User> {
        self.read().clients
    }

    /// Report with server-computed percentages, rendered as provided
    pub fn hud_report(&self) -> Option<HudReport> {
        self.read().hud_report
    }

    pub fn clients_load_state(&self) -> LoadState {
        self.read().clients_load
    }

    pub fn report_load_state(&self) -> LoadState {
        self.read().report_load
    }

    fn read(&self) -> CaseworkerState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CaseworkerState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
