//! Flashcard page: one-at-a-time multiple choice queue
//!
//! Unanswered cards form the queue; the first unanswered card is current.
//! Once no unanswered card remains the page shows its completed state.

use std::sync::{Arc, RwLock};

use brick_domain::{Flashcard, Result};
use tracing::debug;

use crate::fetch::{FetchGeneration, LoadState};
use crate::gateway_ports::FlashcardGateway;
use crate::session::ports::UiSignal;

#[derive(Debug, Default, Clone)]
struct FlashcardState {
    cards: Vec<Flashcard>,
    load: LoadState,
}

pub struct FlashcardService {
    gateway: Arc<dyn FlashcardGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<FlashcardState>,
    generation: FetchGeneration,
}

impl FlashcardService {
    pub fn new(gateway: Arc<dyn FlashcardGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self {
            gateway,
            signals,
            state: RwLock::new(FlashcardState::default()),
            generation: FetchGeneration::new(),
        }
    }

    pub async fn refresh(&self) {
        let generation = self.generation.begin();
        self.write().load = LoadState::Loading;

        let result = self.gateway.cards().await;
        let mut state = self.write();
        if !self.generation.is_current(generation) {
            debug!("Discarding stale flashcard response");
            return;
        }

        match result {
            Ok(cards) => {
                state.cards = cards;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.cards = Vec::new();
                state.load = LoadState::Failed;
                drop(state);
                debug!(error = %err, "Failed to load flashcards");
                self.signals.error("Failed to load flashcards");
            }
        }
    }

    /// The card currently shown: first unanswered in list order
    pub fn current_card(&self) -> Option<Flashcard> {
        self.read().cards.into_iter().find(Flashcard::is_unanswered)
    }

    pub fn unanswered(&self) -> Vec<Flashcard> {
        self.read().cards.into_iter().filter(Flashcard::is_unanswered).collect()
    }

    /// All cards answered (and at least one card exists)
    pub fn is_complete(&self) -> bool {
        let state = self.read();
        !state.cards.is_empty() && state.cards.iter().all(|c| !c.is_unanswered())
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load
    }

    /// `POST /flashcards/{id}/answer`, then re-fetch
    ///
    /// A second answer to the same card overwrites the first server-side.
    pub async fn submit_answer(&self, id: &str, answer: &str) -> Result<()> {
        match self.gateway.answer(id, answer).await {
            Ok(_) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to save your answer");
                Err(err)
            }
        }
    }

    fn read(&self) -> FlashcardState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, FlashcardState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct FakeGateway {
        cards: Mutex<Vec<Flashcard>>,
    }

    fn card(id: &str, answered: bool) -> Flashcard {
        Flashcard {
            id: id.into(),
            category: "housing".into(),
            question: String::new(),
            answer_options: vec!["a".into(), "b".into()],
            user_answer: answered.then(|| "a".to_string()),
            answered_at: None,
        }
    }

    #[async_trait]
    impl FlashcardGateway for FakeGateway {
        async fn cards(&self) -> Result<Vec<Flashcard>> {
            Ok(self.cards.lock().unwrap().clone())
        }

        async fn answer(&self, id: &str, answer: &str) -> Result<Flashcard> {
            let mut cards = self.cards.lock().unwrap();
            let card = cards
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| brick_domain::BrickError::NotFound(id.to_string()))?;
            card.user_answer = Some(answer.to_string());
            Ok(card.clone())
        }
    }

    struct NullSignal;

    impl UiSignal for NullSignal {
        fn success(&self, _message: &str) {}
        fn info(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    #[tokio::test]
    async fn answering_advances_to_the_next_unanswered_card() {
        let gateway = Arc::new(FakeGateway {
            cards: Mutex::new(vec![card("1", false), card("2", false)]),
        });
        let service = FlashcardService::new(gateway, Arc::new(NullSignal));
        service.refresh().await;

        assert_eq!(service.current_card().unwrap().id, "1");
        service.submit_answer("1", "a").await.unwrap();
        assert_eq!(service.current_card().unwrap().id, "2");
        assert!(!service.is_complete());
    }

    #[tokio::test]
    async fn answering_the_last_card_completes_the_queue() {
        let gateway = Arc::new(FakeGateway { cards: Mutex::new(vec![card("1", false)]) });
        let service = FlashcardService::new(gateway, Arc::new(NullSignal));
        service.refresh().await;

        service.submit_answer("1", "b").await.unwrap();
        assert!(service.current_card().is_none());
        assert!(service.is_complete());
    }
}
