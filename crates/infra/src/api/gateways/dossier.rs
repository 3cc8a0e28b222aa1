//! Dossier endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::DossierGateway;
use brick_domain::{DossierItem, DossierItemCreate, Result};

use crate::api::client::ApiClient;

pub struct HttpDossierGateway {
    api: Arc<ApiClient>,
}

impl HttpDossierGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DossierGateway for HttpDossierGateway {
    async fn items(&self) -> Result<Vec<DossierItem>> {
        Ok(self.api.get("/dossier").await?)
    }

    async fn add_item(&self, item: &DossierItemCreate) -> Result<DossierItem> {
        Ok(self.api.post("/dossier", item).await?)
    }
}
