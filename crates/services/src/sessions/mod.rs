mod controller;
mod progress;
mod tick;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{AdvanceOutcome, SessionController, ToggleOutcome};
pub use progress::SessionProgress;
pub use tick::{Tick, TickChain};
pub use workflow::InterviewLoopService;
