//! Flashcard types
//!
//! Flashcards elicit structured facts about a client via multiple choice;
//! answers feed later workbook generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub category: String,
    pub question: String,
    pub answer_options: Vec<String>,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

impl Flashcard {
    /// A card is pending until the user has answered it once
    pub fn is_unanswered(&self) -> bool {
        self.user_answer.is_none()
    }
}

/// Body of `POST /flashcards/{id}/answer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardAnswer {
    pub answer: String,
}
