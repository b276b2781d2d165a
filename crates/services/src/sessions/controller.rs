use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use interview_core::model::{
    FinishReason, QuestionSet, RecordedAnswer, SessionId, SessionResult, SessionSettings,
    SessionState, SlotPhase,
};

use super::progress::SessionProgress;
use super::tick::Tick;
use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The answer timer is now running; start the answer refresh chain.
    Started,
    /// The answer timer stopped and one duration was recorded.
    Stopped { elapsed: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Moved { index: usize },
    Finished,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Interview session state machine.
///
/// Every operation takes the current instant from the caller so the session
/// stays deterministic. Once finished, the running state is frozen and only
/// the `SessionResult` matters.
pub struct SessionController {
    id: SessionId,
    questions: QuestionSet,
    started_at: DateTime<Utc>,
    state: SessionState,
    result: Option<SessionResult>,
}

impl SessionController {
    /// Begin a session on question 0 with no timer running.
    #[must_use]
    pub fn start(
        questions: QuestionSet,
        settings: &SessionSettings,
        now: Instant,
        started_at: DateTime<Utc>,
    ) -> Self {
        let id = SessionId::generate();
        tracing::info!(
            session = %id,
            questions = questions.len(),
            limit_secs = settings.session_limit().as_secs(),
            "interview session started"
        );
        Self {
            id,
            questions,
            started_at,
            state: SessionState::new(now, settings.session_limit()),
            result: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// The question on screen, while running.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.state.current_index())
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.state.current_index() == self.questions.last_index()
    }

    /// Timing phase of the current slot, while running.
    #[must_use]
    pub fn slot_phase(&self) -> Option<SlotPhase> {
        (!self.is_finished()).then(|| self.state.slot_phase())
    }

    #[must_use]
    pub fn answers(&self) -> &[RecordedAnswer] {
        self.state.answers()
    }

    /// Duration recorded for the current slot, if its timer was stopped.
    #[must_use]
    pub fn current_recorded(&self) -> Option<Duration> {
        self.state.recorded_for(self.state.current_index())
    }

    #[must_use]
    pub fn answer_elapsed(&self, now: Instant) -> Option<Duration> {
        if self.is_finished() {
            return None;
        }
        self.state.answer_elapsed(now)
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.is_finished() {
            return Duration::ZERO;
        }
        self.state.remaining(now)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.questions.len();
        SessionProgress {
            total,
            current_number: if self.is_finished() {
                total
            } else {
                self.state.current_index() + 1
            },
            answered: self.state.answers().len(),
            is_complete: self.is_finished(),
        }
    }

    /// Start the answer timer if idle, or stop it and record the answer if running.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AnswerAlreadyRecorded` if this slot was already timed.
    /// Returns `SessionError::Finished` after the session ended.
    pub fn toggle_answer_timer(&mut self, now: Instant) -> Result<ToggleOutcome, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }

        match self.state.slot_phase() {
            SlotPhase::Idle => {
                self.state.start_timer(now);
                tracing::debug!(
                    session = %self.id,
                    question = self.state.current_index() + 1,
                    "answer timer started"
                );
                Ok(ToggleOutcome::Started)
            }
            SlotPhase::Timing => {
                let elapsed = self.state.stop_timer(now).unwrap_or_default();
                tracing::info!(
                    session = %self.id,
                    question = self.state.current_index() + 1,
                    elapsed_secs = elapsed.as_secs_f64(),
                    "answer recorded"
                );
                Ok(ToggleOutcome::Stopped { elapsed })
            }
            SlotPhase::Stopped => {
                tracing::warn!(
                    session = %self.id,
                    question = self.state.current_index() + 1,
                    "toggle rejected: answer already recorded"
                );
                Err(SessionError::AnswerAlreadyRecorded)
            }
        }
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TimerRunning` while the answer timer runs; nothing changes.
    /// Returns `SessionError::Finished` after the session ended.
    pub fn advance_question(&mut self, now: Instant) -> Result<AdvanceOutcome, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        if self.state.is_timing() {
            tracing::warn!(
                session = %self.id,
                question = self.state.current_index() + 1,
                "advance rejected: answer timer running"
            );
            return Err(SessionError::TimerRunning);
        }

        match self.state.move_next(self.questions.len()) {
            Some(index) => {
                tracing::info!(session = %self.id, question = index + 1, "advanced");
                Ok(AdvanceOutcome::Moved { index })
            }
            None => {
                self.finish(now, FinishReason::Completed);
                Ok(AdvanceOutcome::Finished)
            }
        }
    }

    /// Enter the terminal state. Calling it again returns the first result unchanged.
    pub fn finish(&mut self, now: Instant, reason: FinishReason) -> &SessionResult {
        let Self {
            id,
            questions,
            started_at,
            state,
            result,
        } = self;

        result.get_or_insert_with(|| {
            let result = SessionResult::from_state(*started_at, questions, state, now, reason);
            tracing::info!(
                session = %id,
                reason = ?reason,
                answered = result.answered_count(),
                total_secs = result.total_elapsed().as_secs_f64(),
                "interview session finished"
            );
            result
        })
    }

    /// Countdown chain step: finishes the session once the limit is reached.
    pub fn countdown_tick(&mut self, now: Instant) -> Tick {
        if self.is_finished() {
            return Tick::Stop;
        }
        if self.state.remaining(now).is_zero() {
            self.finish(now, FinishReason::TimeExpired);
            return Tick::Stop;
        }
        Tick::Continue
    }

    /// Answer refresh chain step: continues only while an answer timer runs.
    #[must_use]
    pub fn answer_tick(&self, _now: Instant) -> Tick {
        if !self.is_finished() && self.state.is_timing() {
            Tick::Continue
        } else {
            Tick::Stop
        }
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("id", &self.id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.state.current_index())
            .field("answers_len", &self.state.answers().len())
            .field("timing", &self.state.is_timing())
            .field("finished", &self.result.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::model::AnswerOutcome;
    use interview_core::time::fixed_now;

    fn secs(value: f64) -> Duration {
        Duration::from_secs_f64(value)
    }

    fn start(questions: &[&str], limit: Duration) -> (SessionController, Instant) {
        let t0 = Instant::now();
        let settings = SessionSettings::default().with_session_limit(limit).unwrap();
        let questions = QuestionSet::new(questions.iter().copied()).unwrap();
        (
            SessionController::start(questions, &settings, t0, fixed_now()),
            t0,
        )
    }

    #[test]
    fn starts_on_first_question_idle() {
        let (session, t0) = start(&["Q1", "Q2"], secs(600.0));
        assert!(!session.is_finished());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question(), Some("Q1"));
        assert_eq!(session.slot_phase(), Some(SlotPhase::Idle));
        assert!(session.answers().is_empty());
        assert_eq!(session.remaining(t0), secs(600.0));
    }

    #[test]
    fn toggle_start_then_stop_records_one_delta() {
        let (mut session, t0) = start(&["Q1", "Q2"], secs(600.0));

        assert_eq!(session.toggle_answer_timer(t0), Ok(ToggleOutcome::Started));
        assert!(session.answers().is_empty());
        assert_eq!(session.answer_elapsed(t0 + secs(1.25)), Some(secs(1.25)));

        let outcome = session.toggle_answer_timer(t0 + secs(5.0)).unwrap();
        assert_eq!(outcome, ToggleOutcome::Stopped { elapsed: secs(5.0) });
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.answers()[0].duration, secs(5.0));
        assert_eq!(session.slot_phase(), Some(SlotPhase::Stopped));
    }

    #[test]
    fn advance_while_timing_is_rejected_without_changes() {
        let (mut session, t0) = start(&["Q1", "Q2"], secs(600.0));
        session.toggle_answer_timer(t0).unwrap();

        let err = session.advance_question(t0 + secs(1.0)).unwrap_err();
        assert_eq!(err, SessionError::TimerRunning);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.slot_phase(), Some(SlotPhase::Timing));
    }

    #[test]
    fn stopped_slot_rejects_another_toggle() {
        let (mut session, t0) = start(&["Q1"], secs(600.0));
        session.toggle_answer_timer(t0).unwrap();
        session.toggle_answer_timer(t0 + secs(2.0)).unwrap();

        let err = session.toggle_answer_timer(t0 + secs(3.0)).unwrap_err();
        assert_eq!(err, SessionError::AnswerAlreadyRecorded);
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn two_question_scenario_pairs_answers_and_wall_time() {
        let (mut session, t0) = start(&["Q1", "Q2"], secs(600.0));

        session.toggle_answer_timer(t0).unwrap();
        session.toggle_answer_timer(t0 + secs(5.0)).unwrap();
        assert_eq!(
            session.advance_question(t0 + secs(5.5)),
            Ok(AdvanceOutcome::Moved { index: 1 })
        );

        session.toggle_answer_timer(t0 + secs(6.0)).unwrap();
        session.toggle_answer_timer(t0 + secs(9.5)).unwrap();
        let durations: Vec<_> = session.answers().iter().map(|a| a.duration).collect();
        assert_eq!(durations, [secs(5.0), secs(3.5)]);

        assert_eq!(
            session.advance_question(t0 + secs(9.5)),
            Ok(AdvanceOutcome::Finished)
        );
        let result = session.result().expect("finished");
        assert_eq!(result.entries()[0].question, "Q1");
        assert_eq!(result.entries()[0].outcome, AnswerOutcome::Recorded(secs(5.0)));
        assert_eq!(result.entries()[1].question, "Q2");
        assert_eq!(result.entries()[1].outcome, AnswerOutcome::Recorded(secs(3.5)));
        assert_eq!(result.total_elapsed(), secs(9.5));
        assert_eq!(result.reason(), FinishReason::Completed);
    }

    #[test]
    fn finish_is_idempotent() {
        let (mut session, t0) = start(&["Q1", "Q2"], secs(600.0));
        let first = session.finish(t0 + secs(3.0), FinishReason::Completed).clone();
        let second = session
            .finish(t0 + secs(30.0), FinishReason::TimeExpired)
            .clone();

        assert_eq!(first, second);
        assert_eq!(second.total_elapsed(), secs(3.0));
        assert!(session.is_finished());
    }

    #[test]
    fn finished_session_rejects_input() {
        let (mut session, t0) = start(&["Q1"], secs(600.0));
        session.finish(t0, FinishReason::Completed);

        assert_eq!(session.toggle_answer_timer(t0), Err(SessionError::Finished));
        assert_eq!(session.advance_question(t0), Err(SessionError::Finished));
        assert_eq!(session.current_question(), None);
        assert_eq!(session.slot_phase(), None);
    }

    #[test]
    fn countdown_expiry_mid_answer_marks_interrupted() {
        let (mut session, t0) = start(&["Q1", "Q2", "Q3"], secs(60.0));
        session.advance_question(t0 + secs(1.0)).unwrap();
        session.toggle_answer_timer(t0 + secs(10.0)).unwrap();

        assert_eq!(session.countdown_tick(t0 + secs(59.0)), Tick::Continue);
        assert_eq!(session.countdown_tick(t0 + secs(60.0)), Tick::Stop);

        let result = session.result().expect("finished by countdown");
        let outcomes: Vec<_> = result.entries().iter().map(|e| e.outcome).collect();
        assert_eq!(
            outcomes,
            [
                AnswerOutcome::Skipped,
                AnswerOutcome::Interrupted,
                AnswerOutcome::Unreached,
            ]
        );
        assert_eq!(result.reason(), FinishReason::TimeExpired);
        assert_eq!(result.total_answer_time(), Duration::ZERO);
        assert!(session.answers().is_empty());
        assert_eq!(session.answer_tick(t0 + secs(61.0)), Tick::Stop);
        assert_eq!(session.countdown_tick(t0 + secs(61.0)), Tick::Stop);
    }

    #[test]
    fn answer_tick_follows_timer() {
        let (mut session, t0) = start(&["Q1"], secs(600.0));
        assert_eq!(session.answer_tick(t0), Tick::Stop);
        session.toggle_answer_timer(t0).unwrap();
        assert_eq!(session.answer_tick(t0 + secs(0.1)), Tick::Continue);
        session.toggle_answer_timer(t0 + secs(0.2)).unwrap();
        assert_eq!(session.answer_tick(t0 + secs(0.3)), Tick::Stop);
    }

    #[test]
    fn skipping_keeps_later_answers_aligned() {
        let (mut session, t0) = start(&["Q1", "Q2", "Q3"], secs(600.0));
        session.advance_question(t0).unwrap();
        session.toggle_answer_timer(t0 + secs(1.0)).unwrap();
        session.toggle_answer_timer(t0 + secs(3.0)).unwrap();
        session.advance_question(t0 + secs(3.0)).unwrap();
        session.advance_question(t0 + secs(4.0)).unwrap();

        let result = session.result().expect("finished");
        assert_eq!(result.entries()[0].outcome, AnswerOutcome::Skipped);
        assert_eq!(result.entries()[1].outcome, AnswerOutcome::Recorded(secs(2.0)));
        assert_eq!(result.entries()[2].outcome, AnswerOutcome::Skipped);
    }

    #[test]
    fn answers_never_exceed_questions() {
        let (mut session, t0) = start(&["Q1", "Q2"], secs(600.0));
        let mut now = t0;
        for _ in 0..10 {
            now += secs(0.5);
            let _ = session.toggle_answer_timer(now);
            assert!(session.answers().len() <= session.questions().len());
            now += secs(0.5);
            let _ = session.advance_question(now);
            assert!(session.answers().len() <= session.questions().len());
        }
        assert!(session.is_finished());
    }

    #[test]
    fn progress_reports_position() {
        let (mut session, t0) = start(&["Q1", "Q2"], secs(600.0));
        assert_eq!(
            session.progress(),
            SessionProgress {
                total: 2,
                current_number: 1,
                answered: 0,
                is_complete: false,
            }
        );
        session.advance_question(t0).unwrap();
        session.advance_question(t0).unwrap();
        assert_eq!(session.progress().current_number, 2);
        assert!(session.progress().is_complete);
    }
}
