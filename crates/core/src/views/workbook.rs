//! Workbook page: gamified tasks, stats, and generated workbooks
//!
//! Tasks and stats are independent collections and load concurrently; each
//! keeps its own load state so the page renders partially when one of the
//! two fails.

use std::sync::{Arc, RwLock};

use brick_domain::{Result, Workbook, WorkbookProgressUpdate, WorkbookStats, WorkbookTask};
use tracing::debug;

use crate::aggregate::level_for_points;
use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::WorkbookGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct WorkbookState {
    tasks: Vec<WorkbookTask>,
    tasks_load: LoadState,
    stats: WorkbookStats,
    stats_load: LoadState,
    workbooks: Vec<Workbook>,
    workbooks_load: LoadState,
}

pub struct WorkbookService {
    gateway: Arc<dyn WorkbookGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<WorkbookState>,
    generation: FetchGeneration,
}

impl WorkbookService {
    pub fn new(gateway: Arc<dyn WorkbookGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(WorkbookState::default()),
            generation: FetchGeneration::new(),
        }
    }

    /// Load tasks and stats concurrently
    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        {
            let mut state = self.write();
            state.tasks_load = LoadState::Loading;
            state.stats_load = LoadState::Loading;
        }

        let (tasks, stats) = tokio::join!(self.gateway.tasks(), self.gateway.stats());

        // The staleness check must happen under the write lock: a newer
        // refresh may finish between the join and the writes, and its state
        // must not be overwritten by this older response.
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale workbook response");
            return;
        }

        let mut tasks_error = None;
        match tasks {
            Ok(tasks) => {
                state.tasks = tasks;
                state.tasks_load = LoadState::Ready;
            }
            Err(err) => {
                state.tasks = Vec::new();
                state.tasks_load = LoadState::Failed;
                debug!(error = %err, "Failed to load workbook tasks");
                tasks_error = Some("Failed to load tasks");
            }
        }

        let mut stats_error = None;
        match stats {
            Ok(stats) => {
                state.stats = stats;
                state.stats_load = LoadState::Ready;
            }
            Err(err) => {
                state.stats = WorkbookStats::default();
                state.stats_load = LoadState::Failed;
                debug!(error = %err, "Failed to load workbook stats");
                stats_error = Some("Failed to load your progress");
            }
        }
        drop(state);

        if let Some(message) = tasks_error {
            self.signals.error(message);
        }
        if let Some(message) = stats_error {
            self.signals.error(message);
        }
    }

    /// Load the generated workbooks list
    pub async fn refresh_workbooks(&self) {
        let generation = self.generation.begin();
        self.write().workbooks_load = LoadState::Loading;

        let result = self.gateway.workbooks().await;
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale workbooks response");
            return;
        }

        match result {
            Ok(workbooks) => {
                state.workbooks = workbooks;
                state.workbooks_load = LoadState::Ready;
            }
            Err(err) => {
                state.workbooks = Vec::new();
                state.workbooks_load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load workbooks");
                self.signals.error("Failed to load workbooks");
            }
        }
    }

    pub fn tasks(&self) -> Vec<WorkbookTask> {
        self.read().tasks
    }

    pub fn stats(&self) -> WorkbookStats {
        self.read().stats
    }

    pub fn workbooks(&self) -> Vec<Workbook> {
        self.read().workbooks
    }

    pub fn tasks_load_state(&self) -> LoadState {
        self.read().tasks_load
    }

    pub fn stats_load_state(&self) -> LoadState {
        self.read().stats_load
    }

    /// Level shown on the page
    ///
    /// The server stats value is authoritative; the local derivation only
    /// fills in while stats have not loaded.
    pub fn display_level(&self) -> u32 {
        let state = self.read();
        if state.stats_load.is_ready() {
            state.stats.level
        } else {
            let points: u32 =
                state.tasks.iter().filter(|t| t.completed).map(|t| t.points).sum();
            level_for_points(points)
        }
    }

    /// `PATCH /workbook/tasks/{id}/complete`, then re-fetch tasks and stats
    pub async fn complete_task(&self, id: &str, answer: Option<&str>) -> Result<()> {
        match self.gateway.complete_task(id, answer).await {
            Ok(task) => {
                self.signals.success(&format!("Task completed! +{} points", task.points));
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to complete task");
                Err(err)
            }
        }
    }

    /// `POST /workbooks/generate`, then re-fetch the list
    pub async fn generate(&self) -> Result<Workbook> {
        match self.gateway.generate().await {
            Ok(workbook) => {
                self.signals.success("Your workbook is ready");
                self.refresh_workbooks().await;
                Ok(workbook)
            }
            Err(err) => {
                self.signals.error("Failed to generate workbook");
                Err(err)
            }
        }
    }

    /// `PATCH /workbooks/{id}/progress`, then re-fetch the list
    ///
    /// The backend recomputes the progress percentage; the response is not
    /// merged locally.
    pub async fn update_progress(
        &self,
        id: &str,
        update: &WorkbookProgressUpdate,
    ) -> Result<()> {
        match self.gateway.update_progress(id, update).await {
            Ok(_) => {
                self.refresh_workbooks().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to save progress");
                Err(err)
            }
        }
    }

    fn read(&self) -> WorkbookState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, WorkbookState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
