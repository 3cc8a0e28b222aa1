//! Workbook task and generated-workbook endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::WorkbookGateway;
use brick_domain::{Result, Workbook, WorkbookProgressUpdate, WorkbookStats, WorkbookTask};
use serde_json::json;

use crate::api::client::ApiClient;

pub struct HttpWorkbookGateway {
    api: Arc<ApiClient>,
}

impl HttpWorkbookGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WorkbookGateway for HttpWorkbookGateway {
    async fn tasks(&self) -> Result<Vec<WorkbookTask>> {
        Ok(self.api.get("/workbook/tasks").await?)
    }

    async fn complete_task(&self, id: &str, answer: Option<&str>) -> Result<WorkbookTask> {
        let body = match answer {
            Some(answer) => json!({ "answer": answer }),
            None => json!({}),
        };
        Ok(self.api.patch(&format!("/workbook/tasks/{id}/complete"), &body).await?)
    }

    async fn stats(&self) -> Result<WorkbookStats> {
        Ok(self.api.get("/workbook/stats").await?)
    }

    async fn workbooks(&self) -> Result<Vec<Workbook>> {
        Ok(self.api.get("/workbooks").await?)
    }

    async fn generate(&self) -> Result<Workbook> {
        Ok(self.api.post("/workbooks/generate", &json!({})).await?)
    }

    async fn workbook(&self, id: &str) -> Result<Workbook> {
        Ok(self.api.get(&format!("/workbooks/{id}")).await?)
    }

    async fn update_progress(
        &self,
        id: &str,
        update: &WorkbookProgressUpdate,
    ) -> Result<Workbook> {
        Ok(self.api.patch(&format!("/workbooks/{id}/progress"), update).await?)
    }
}
