#![forbid(unsafe_code)]

pub mod bundled;
pub mod json_file;
pub mod repository;

pub use repository::{InMemoryRepository, QuestionRepository, Storage, StorageError};
