#![forbid(unsafe_code)]

pub mod error;
pub mod question_service;
pub mod sessions;

pub use interview_core::Clock;

pub use error::{QuestionServiceError, SessionError};
pub use question_service::QuestionService;

pub use sessions::{
    AdvanceOutcome, InterviewLoopService, SessionController, SessionProgress, Tick,
    TickChain, ToggleOutcome,
};
