//! Legal aid pages: forms library and tracked cases

use std::sync::{Arc, RwLock};

use brick_domain::{LegalCase, LegalForm};
use tracing::debug;

use crate::aggregate::group_by;
use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::LegalGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct LegalState {
    forms: Vec<LegalForm>,
    forms_load: LoadState,
    cases: Vec<LegalCase>,
    cases_load: LoadState,
}

pub struct LegalService {
    gateway: Arc<dyn LegalGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<LegalState>,
    generation: FetchGeneration,
}

impl LegalService {
    pub fn new(gateway: Arc<dyn LegalGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(LegalState::default()),
            generation: FetchGeneration::new(),
        }
    }

    /// Load forms and cases concurrently
    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        {
            let mut state = self.write();
            state.forms_load = LoadState::Loading;
            state.cases_load = LoadState::Loading;
        }

        let (forms, cases) = tokio::join!(self.gateway.forms(), self.gateway.cases());

        // Checked under the write lock so a newer refresh completing between
        // the join and the writes is never overwritten.
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale legal response");
            return;
        }

        let mut forms_error = None;
        match forms {
            Ok(forms) => {
                state.forms = forms;
                state.forms_load = LoadState::Ready;
            }
            Err(err) => {
                state.forms = Vec::new();
                state.forms_load = LoadState::Failed;
                debug!(error = %err, "Failed to load legal forms");
                forms_error = Some("Failed to load legal forms");
            }
        }

        let mut cases_error = None;
        match cases {
            Ok(cases) => {
                state.cases = cases;
                state.cases_load = LoadState::Ready;
            }
            Err(err) => {
                state.cases = Vec::new();
                state.cases_load = LoadState::Failed;
                debug!(error = %err, "Failed to load legal cases");
                cases_error = Some("Failed to load cases");
            }
        }
        drop(state);

        if let Some(message) = forms_error {
            self.signals.error(message);
        }
        if let Some(message) = cases_error {
            self.signals.error(message);
        }
    }

    /// Forms partitioned by category, preserving encounter order
    pub fn forms_by_category(&self) -> Vec<(String, Vec<LegalForm>)> {
        group_by(self.read().forms, |form| form.category.clone())
    }

    pub fn forms(&self) -> Vec<LegalForm> {
        self.read().forms
    }

    pub fn cases(&self) -> Vec<LegalCase> {
        self.read().cases
    }

    pub fn forms_load_state(&self) -> LoadState {
        self.read().forms_load
    }

    pub fn cases_load_state(&self) -> LoadState {
        self.read().cases_load
    }

    fn read(&self) -> LegalState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, LegalState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
