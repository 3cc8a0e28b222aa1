//! Resource map page
//!
//! The category filter is applied server-side via the query parameter; the
//! client only forwards it.

use std::sync::{Arc, RwLock};

use brick_domain::constants::CATEGORY_ALL;
use brick_domain::Resource;
use tracing::debug;

use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::ResourceGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct ResourceState {
    resources: Vec<Resource>,
    load: LoadState,
}

pub struct ResourceService {
    gateway: Arc<dyn ResourceGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<ResourceState>,
    generation: FetchGeneration,
}

impl ResourceService {
    pub fn new(gateway: Arc<dyn ResourceGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(ResourceState::default()),
            generation: FetchGeneration::new(),
        }
    }

    /// Load resources, optionally narrowed to a category
    ///
    /// The "all" sentinel (or `None`) omits the query parameter entirely.
    pub async fn refresh(&self, category: Option<&str>) {
        let generation = self.generation.begin();
        self.write().load = LoadState::Loading;

        let category = category.filter(|c| *c != CATEGORY_ALL);
        let result = self.gateway.resources(category).await;
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale resources response");
            return;
        }

        match result {
            Ok(resources) => {
                state.resources = resources;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.resources = Vec::new();
                state.load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load resources");
                self.signals.error("Failed to load resources");
            }
        }
    }

    pub fn resources(&self) -> Vec<Resource> {
        self.read().resources
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load
    }

    fn read(&self) -> ResourceState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, ResourceState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
