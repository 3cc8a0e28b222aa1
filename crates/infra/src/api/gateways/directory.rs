//! Partner directory gateway
//!
//! Organization profiles ship with the client as embedded data and change
//! only with releases; just the outbound message goes over the wire.

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::DirectoryGateway;
use brick_domain::{BrickError, DirectoryMessage, Organization, Result};
use serde_json::json;

use crate::api::client::ApiClient;

const ORGANIZATIONS_JSON: &str = include_str!("../../data/organizations.json");

pub struct StaticDirectoryGateway {
    api: Arc<ApiClient>,
}

impl StaticDirectoryGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DirectoryGateway for StaticDirectoryGateway {
    async fn organizations(&self) -> Result<Vec<Organization>> {
        serde_json::from_str(ORGANIZATIONS_JSON)
            .map_err(|e| BrickError::Internal(format!("Embedded directory data invalid: {e}")))
    }

    async fn send_message(&self, message: &DirectoryMessage) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .post(
                "/directory/message",
                &json!({
                    "organization_id": message.organization_id,
                    "organization_name": message.organization_name,
                    "message": message.message,
                }),
            )
            .await?;
        Ok(())
    }
}
