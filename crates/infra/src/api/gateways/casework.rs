//! Caseworker and agency reporting endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::CaseworkGateway;
use brick_domain::{HudReport, Result, UnifiedClientList, User};

use crate::api::client::ApiClient;

pub struct HttpCaseworkGateway {
    api: Arc<ApiClient>,
}

impl HttpCaseworkGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CaseworkGateway for HttpCaseworkGateway {
    async fn clients(&self) -> Result<Vec<User>> {
        Ok(self.api.get("/caseworker/clients").await?)
    }

    async fn hud_report(&self) -> Result<HudReport> {
        Ok(self.api.get("/caseworker/hud-report").await?)
    }

    async fn unified_clients(&self) -> Result<UnifiedClientList> {
        Ok(self.api.get("/agency/clients/unified").await?)
    }
}
