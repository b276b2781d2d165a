use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::bundled::DEFAULT_QUESTIONS;
use crate::json_file::JsonFileRepository;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of raw question texts, in display order.
///
/// Validation into a `QuestionSet` happens in the services layer.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load every question text in order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or decoded.
    async fn load_questions(&self) -> Result<Vec<String>, StorageError>;
}

/// Fixed list of questions held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    questions: Arc<Vec<String>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            questions: Arc::new(questions.into_iter().map(Into::into).collect()),
        }
    }

    /// The built-in interview questions.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(DEFAULT_QUESTIONS.iter().copied())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.questions.as_ref().clone())
    }
}

/// Question source selected at startup.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            questions: Arc::new(InMemoryRepository::new(questions)),
        }
    }

    #[must_use]
    pub fn bundled() -> Self {
        Self {
            questions: Arc::new(InMemoryRepository::bundled()),
        }
    }

    #[must_use]
    pub fn json_file(path: impl AsRef<Path>) -> Self {
        Self {
            questions: Arc::new(JsonFileRepository::new(path)),
        }
    }
}
