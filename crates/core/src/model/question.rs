use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set cannot be empty")]
    Empty,

    #[error("question {number} is blank")]
    BlankQuestion { number: usize },
}

/// Ordered, immutable list of interview questions.
///
/// Always holds at least one question and no entry is blank. Cloning shares
/// the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Arc<[String]>,
}

impl QuestionSet {
    /// Build a question set, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` if no questions are given.
    /// Returns `QuestionSetError::BlankQuestion` if an entry is empty or whitespace only.
    pub fn new<I, S>(questions: I) -> Result<Self, QuestionSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions: Vec<String> = questions.into_iter().map(Into::into).collect();
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        if let Some(index) = questions.iter().position(|q| q.trim().is_empty()) {
            return Err(QuestionSetError::BlankQuestion { number: index + 1 });
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }
}
