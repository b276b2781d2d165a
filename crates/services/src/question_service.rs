use std::sync::Arc;

use interview_core::model::QuestionSet;
use storage::QuestionRepository;

use crate::error::QuestionServiceError;

/// Loads and validates the question list before a session starts.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Fetch the configured questions as a validated `QuestionSet`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Storage` if the source cannot be read.
    /// Returns `QuestionServiceError::Questions` if the list is empty or has blank entries.
    pub async fn load(&self) -> Result<QuestionSet, QuestionServiceError> {
        let raw = self.questions.load_questions().await?;
        let set = QuestionSet::new(raw)?;
        tracing::info!(count = set.len(), "questions loaded");
        Ok(set)
    }
}
