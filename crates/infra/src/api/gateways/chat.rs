//! AI caseworker chat endpoint

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::ChatGateway;
use brick_domain::{ChatReply, ChatRequest, Result};

use crate::api::client::ApiClient;

pub struct HttpChatGateway {
    api: Arc<ApiClient>,
}

impl HttpChatGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
        Ok(self.api.post("/chat/message", request).await?)
    }
}
