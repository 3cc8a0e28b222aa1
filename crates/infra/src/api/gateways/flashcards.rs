//! Flashcard endpoints

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::FlashcardGateway;
use brick_domain::{Flashcard, FlashcardAnswer, Result};

use crate::api::client::ApiClient;

pub struct HttpFlashcardGateway {
    api: Arc<ApiClient>,
}

impl HttpFlashcardGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FlashcardGateway for HttpFlashcardGateway {
    async fn cards(&self) -> Result<Vec<Flashcard>> {
        Ok(self.api.get("/flashcards").await?)
    }

    async fn answer(&self, id: &str, answer: &str) -> Result<Flashcard> {
        let body = FlashcardAnswer { answer: answer.to_string() };
        Ok(self.api.post(&format!("/flashcards/{id}/answer"), &body).await?)
    }
}
