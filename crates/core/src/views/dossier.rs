//! Dossier page: categorized record of the client's circumstances

use std::sync::{Arc, RwLock};

use brick_domain::{DossierItem, DossierItemCreate, Result};
use tracing::debug;

use crate::aggregate::group_by;
use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::DossierGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct DossierState {
    items: Vec<DossierItem>,
    load: LoadState,
}

pub struct DossierService {
    gateway: Arc<dyn DossierGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<DossierState>,
    generation: FetchGeneration,
}

impl DossierService {
    pub fn new(gateway: Arc<dyn DossierGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(DossierState::default()),
            generation: FetchGeneration::new(),
        }
    }

    /// Load the dossier items
    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        self.write().load = LoadState::Loading;

        let result = self.gateway.items().await;
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale dossier response");
            return;
        }

        match result {
            Ok(items) => {
                state.items = items;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.items = Vec::new();
                state.load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load dossier");
                self.signals.error("Failed to load your dossier");
            }
        }
    }

    /// Items partitioned by category, preserving encounter order
    pub fn grouped(&self) -> Vec<(String, Vec<DossierItem>)> {
        group_by(self.read().items, |item| item.category.clone())
    }

    pub fn items(&self) -> Vec<DossierItem> {
        self.read().items
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load
    }

    /// `POST /dossier`, then re-fetch
    pub async fn add_item(&self, item: &DossierItemCreate) -> Result<()> {
        match self.gateway.add_item(item).await {
            Ok(_) => {
                self.signals.success("Added to your dossier");
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to add item");
                Err(err)
            }
        }
    }

    fn read(&self) -> DossierState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, DossierState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
