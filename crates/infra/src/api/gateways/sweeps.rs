//! Cleanup sweep endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::SweepGateway;
use brick_domain::{CleanupSweep, CleanupSweepCreate, Result};

use crate::api::client::ApiClient;

pub struct HttpSweepGateway {
    api: Arc<ApiClient>,
}

impl HttpSweepGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SweepGateway for HttpSweepGateway {
    async fn sweeps(&self) -> Result<Vec<CleanupSweep>> {
        Ok(self.api.get("/cleanup/sweeps").await?)
    }

    async fn post_sweep(&self, sweep: &CleanupSweepCreate) -> Result<CleanupSweep> {
        Ok(self.api.post("/cleanup/sweeps", sweep).await?)
    }
}
