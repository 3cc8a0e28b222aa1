//! HMIS intake and export endpoints
//!
//! The CSV export arrives base64-encoded inside a JSON envelope and is
//! decoded here, so callers receive ready-to-save bytes.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use brick_core::HmisGateway;
use brick_domain::{
    BrickError, HmisArchive, HmisClientProfile, HmisEnrollment, HmisExportPayload, Result,
};

use crate::api::client::ApiClient;

pub struct HttpHmisGateway {
    api: Arc<ApiClient>,
}

impl HttpHmisGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl HmisGateway for HttpHmisGateway {
    async fn submit_client_profile(&self, profile: &HmisClientProfile) -> Result<()> {
        let _: serde_json::Value = self.api.post("/hmis/client-profile", profile).await?;
        Ok(())
    }

    async fn submit_enrollment(&self, enrollment: &HmisEnrollment) -> Result<()> {
        let _: serde_json::Value = self.api.post("/hmis/enrollments", enrollment).await?;
        Ok(())
    }

    async fn export_archive(&self) -> Result<HmisArchive> {
        let payload: HmisExportPayload = self.api.get("/hmis/export/csv").await?;
        let bytes = STANDARD
            .decode(payload.file_data.as_bytes())
            .map_err(|e| BrickError::Internal(format!("Malformed export payload: {e}")))?;
        Ok(HmisArchive { filename: payload.filename, bytes })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::client::ApiClient;
    use crate::api::token::StaticTokenProvider;

    use super::*;

    #[tokio::test]
    async fn export_decodes_the_archive_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hmis/export/csv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "file_data": "Y2xpZW50X2lkLG5hbWUK",
                "filename": "hmis_export.zip"
            })))
            .mount(&server)
            .await;

        let api = ApiClient::builder()
            .base_url(server.uri())
            .build(Arc::new(StaticTokenProvider::new(Some("tok".into()))))
            .unwrap();
        let archive = HttpHmisGateway::new(Arc::new(api)).export_archive().await.unwrap();

        assert_eq!(archive.filename, "hmis_export.zip");
        assert_eq!(archive.bytes, b"client_id,name\n");
    }
}
