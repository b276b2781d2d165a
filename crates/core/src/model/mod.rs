mod ids;
mod question;
mod result;
mod session;
mod settings;

pub use ids::SessionId;
pub use question::{QuestionSet, QuestionSetError};
pub use result::{AnswerOutcome, FinishReason, ResultEntry, SessionResult};
pub use session::{RecordedAnswer, SessionState, SlotPhase};
pub use settings::{SessionSettings, SettingsError};
