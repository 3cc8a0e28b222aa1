//! Legal aid endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::LegalGateway;
use brick_domain::{LegalCase, LegalForm, Result};

use crate::api::client::ApiClient;

pub struct HttpLegalGateway {
    api: Arc<ApiClient>,
}

impl HttpLegalGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl LegalGateway for HttpLegalGateway {
    async fn forms(&self) -> Result<Vec<LegalForm>> {
        Ok(self.api.get("/legal/forms").await?)
    }

    async fn cases(&self) -> Result<Vec<LegalCase>> {
        Ok(self.api.get("/legal/cases").await?)
    }
}
