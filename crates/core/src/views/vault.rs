//! Vault page: stored documents and uploads

use std::sync::{Arc, RwLock};

use brick_domain::{Result, VaultDocument};
use tracing::debug;

use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::VaultGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct VaultState {
    documents: Vec<VaultDocument>,
    load: LoadState,
}

pub struct VaultService {
    gateway: Arc<dyn VaultGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<VaultState>,
    generation: FetchGeneration,
}

impl VaultService {
    pub fn new(gateway: Arc<dyn VaultGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(VaultState::default()),
            generation: FetchGeneration::new(),
        }
    }

    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        self.write().load = LoadState::Loading;

        let result = self.gateway.documents().await;
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale vault response");
            return;
        }

        match result {
            Ok(documents) => {
                state.documents = documents;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.documents = Vec::new();
                state.load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load vault");
                self.signals.error("Failed to load your documents");
            }
        }
    }

    pub fn documents(&self) -> Vec<VaultDocument> {
        self.read().documents
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load
    }

    /// `POST /vault/upload`, then re-fetch
    pub async fn upload(
        &self,
        document_type: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<()> {
        match self.gateway.upload(document_type, file_name, bytes).await {
            Ok(_) => {
                self.signals.success("Document uploaded securely");
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to upload document");
                Err(err)
            }
        }
    }

    fn read(&self) -> VaultState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, VaultState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
