//! Document vault endpoints
//!
//! File content crosses the wire base64-encoded inside a JSON body; the
//! encoding is this adapter's concern so callers hand over raw bytes.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use brick_core::VaultGateway;
use brick_domain::{DocumentUpload, Result, VaultDocument};

use crate::api::client::ApiClient;

pub struct HttpVaultGateway {
    api: Arc<ApiClient>,
}

impl HttpVaultGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl VaultGateway for HttpVaultGateway {
    async fn documents(&self) -> Result<Vec<VaultDocument>> {
        Ok(self.api.get("/vault/documents").await?)
    }

    async fn upload(
        &self,
        document_type: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<VaultDocument> {
        let body = DocumentUpload {
            document_type: document_type.to_string(),
            file_name: file_name.to_string(),
            file_data: STANDARD.encode(bytes),
        };
        Ok(self.api.post("/vault/upload", &body).await?)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::client::ApiClient;
    use crate::api::token::StaticTokenProvider;

    use super::*;

    #[tokio::test]
    async fn upload_base64_encodes_the_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/vault/upload"))
            .and(body_json(serde_json::json!({
                "document_type": "dd214",
                "file_name": "dd214.pdf",
                "file_data": "aGVsbG8="
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "d1",
                "document_type": "dd214",
                "file_name": "dd214.pdf",
                "created_at": "2025-01-15T10:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::builder()
            .base_url(server.uri())
            .build(Arc::new(StaticTokenProvider::new(Some("tok".into()))))
            .unwrap();
        let gateway = HttpVaultGateway::new(Arc::new(api));

        let document = gateway.upload("dd214", "dd214.pdf", b"hello").await.unwrap();
        assert_eq!(document.id, "d1");
    }
}
