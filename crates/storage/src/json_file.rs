use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::repository::{QuestionRepository, StorageError};

/// Accepted layouts for a question file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    List(Vec<String>),
    Document { questions: Vec<String> },
}

impl QuestionFile {
    fn into_questions(self) -> Vec<String> {
        match self {
            QuestionFile::List(questions) | QuestionFile::Document { questions } => questions,
        }
    }
}

/// Reads questions from a UTF-8 JSON file.
///
/// The file holds either a bare array of strings or an object with a
/// `questions` array. The file is re-read on every load.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn load_questions(&self) -> Result<Vec<String>, StorageError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StorageError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let file: QuestionFile =
            serde_json::from_slice(&raw).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let questions = file.into_questions();

        tracing::debug!(
            path = %self.path.display(),
            count = questions.len(),
            "loaded question file"
        );
        Ok(questions)
    }
}
