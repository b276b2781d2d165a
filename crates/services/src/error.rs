//! Shared error types for the services crate.

use thiserror::Error;

use interview_core::model::QuestionSetError;
use storage::StorageError;

/// Rejected session transitions. All of them leave the session unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("stop the answer timer before moving to the next question")]
    TimerRunning,
    #[error("an answer time is already recorded for this question")]
    AnswerAlreadyRecorded,
    #[error("session already finished")]
    Finished,
}

/// Errors emitted by `QuestionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionServiceError {
    #[error(transparent)]
    Questions(#[from] QuestionSetError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
