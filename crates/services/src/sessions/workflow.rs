use std::time::Instant;

use interview_core::model::{QuestionSet, SessionSettings};

use super::controller::{AdvanceOutcome, SessionController, ToggleOutcome};
use super::tick::{Tick, TickChain};
use crate::Clock;
use crate::error::SessionError;

/// Orchestrates a session against the configured clock.
///
/// The controller takes explicit instants; this service supplies them from
/// its `Clock` so the UI never reads time on its own.
#[derive(Debug, Clone)]
pub struct InterviewLoopService {
    clock: Clock,
    settings: SessionSettings,
}

impl InterviewLoopService {
    #[must_use]
    pub fn new(clock: Clock, settings: SessionSettings) -> Self {
        Self { clock, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    #[must_use]
    pub fn interval(&self, chain: TickChain) -> std::time::Duration {
        chain.interval(&self.settings)
    }

    /// Start a new session on the given questions.
    #[must_use]
    pub fn start_session(&self, questions: QuestionSet) -> SessionController {
        SessionController::start(
            questions,
            &self.settings,
            self.clock.now(),
            self.clock.wall_now(),
        )
    }

    /// # Errors
    ///
    /// See `SessionController::toggle_answer_timer`.
    pub fn toggle_timer(
        &self,
        session: &mut SessionController,
    ) -> Result<ToggleOutcome, SessionError> {
        session.toggle_answer_timer(self.clock.now())
    }

    /// # Errors
    ///
    /// See `SessionController::advance_question`.
    pub fn advance(&self, session: &mut SessionController) -> Result<AdvanceOutcome, SessionError> {
        session.advance_question(self.clock.now())
    }

    pub fn countdown_tick(&self, session: &mut SessionController) -> Tick {
        let tick = session.countdown_tick(self.clock.now());
        if tick == Tick::Stop {
            tracing::debug!(session = %session.id(), "countdown chain stopped");
        }
        tick
    }

    #[must_use]
    pub fn answer_tick(&self, session: &SessionController) -> Tick {
        let tick = session.answer_tick(self.clock.now());
        if tick == Tick::Stop {
            tracing::debug!(session = %session.id(), "answer refresh chain stopped");
        }
        tick
    }
}
