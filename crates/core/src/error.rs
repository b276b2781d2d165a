use thiserror::Error;

use crate::model::{QuestionSetError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Questions(#[from] QuestionSetError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
