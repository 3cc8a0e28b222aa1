//! Resource map endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::ResourceGateway;
use brick_domain::{Resource, Result};

use crate::api::client::ApiClient;

pub struct HttpResourceGateway {
    api: Arc<ApiClient>,
}

impl HttpResourceGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceGateway for HttpResourceGateway {
    async fn resources(&self, category: Option<&str>) -> Result<Vec<Resource>> {
        match category {
            Some(category) => {
                Ok(self.api.get_with_query("/resources", &[("category", category)]).await?)
            }
            None => Ok(self.api.get("/resources").await?),
        }
    }
}
