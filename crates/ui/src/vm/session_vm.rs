use std::time::Instant;

use interview_core::model::QuestionSet;
use services::{AdvanceOutcome, InterviewLoopService, SessionController, Tick, ToggleOutcome};

use crate::vm::notice_vm::Notice;
use crate::vm::screen_vm::{SessionScreen, project};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    ToggleTimer,
    Advance,
    DismissNotice,
    Exit,
}

/// What the view has to do after an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    None,
    StartAnswerTicks,
    StopAnswerTicks,
    Finished,
    Exit,
}

/// Session state owned by the view, plus the instant it was last observed at.
///
/// Every mutation records `observed_at` so a re-render shows the same
/// timers the controller just acted on.
#[derive(Debug)]
pub struct SessionVm {
    session: SessionController,
    notice: Option<Notice>,
    observed_at: Instant,
}

impl SessionVm {
    #[must_use]
    pub fn start(service: &InterviewLoopService, questions: QuestionSet) -> Self {
        Self {
            session: service.start_session(questions),
            notice: None,
            observed_at: service.now(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> SessionScreen {
        project(&self.session, self.observed_at)
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[cfg(test)]
    pub(crate) fn timer_running(&self) -> bool {
        self.session.answer_tick(self.observed_at) == Tick::Continue
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn apply(
        &mut self,
        service: &InterviewLoopService,
        intent: SessionIntent,
    ) -> SessionEffect {
        let effect = match intent {
            SessionIntent::ToggleTimer => match service.toggle_timer(&mut self.session) {
                Ok(ToggleOutcome::Started) => {
                    self.notice = None;
                    SessionEffect::StartAnswerTicks
                }
                Ok(ToggleOutcome::Stopped { elapsed }) => {
                    self.notice = Some(Notice::answer_recorded(elapsed));
                    SessionEffect::StopAnswerTicks
                }
                Err(err) => {
                    self.notice = Some(Notice::rejected(err));
                    SessionEffect::None
                }
            },
            SessionIntent::Advance => match service.advance(&mut self.session) {
                Ok(AdvanceOutcome::Moved { .. }) => {
                    self.notice = None;
                    SessionEffect::None
                }
                Ok(AdvanceOutcome::Finished) => {
                    self.notice = None;
                    SessionEffect::Finished
                }
                Err(err) => {
                    self.notice = Some(Notice::rejected(err));
                    SessionEffect::None
                }
            },
            SessionIntent::DismissNotice => {
                self.notice = None;
                SessionEffect::None
            }
            SessionIntent::Exit => {
                if self.session.is_finished() {
                    SessionEffect::Exit
                } else {
                    SessionEffect::None
                }
            }
        };
        self.observed_at = service.now();
        effect
    }

    pub fn countdown_tick(&mut self, service: &InterviewLoopService) -> Tick {
        let tick = service.countdown_tick(&mut self.session);
        if tick == Tick::Stop {
            self.notice = None;
        }
        self.observed_at = service.now();
        tick
    }

    pub fn answer_tick(&mut self, service: &InterviewLoopService) -> Tick {
        let tick = service.answer_tick(&self.session);
        self.observed_at = service.now();
        tick
    }
}
