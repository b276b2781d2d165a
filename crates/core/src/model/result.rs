use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::model::{QuestionSet, SessionState};

/// Why a session reached its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    /// The last question was advanced past.
    Completed,
    /// The session limit elapsed first.
    TimeExpired,
}

/// What happened to one question slot by the end of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer timer was started and stopped.
    Recorded(Duration),
    /// The question was shown but advanced without timing an answer.
    Skipped,
    /// The session ended while this question's timer was still running.
    Interrupted,
    /// The session ended before this question was shown.
    Unreached,
}

impl AnswerOutcome {
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            AnswerOutcome::Recorded(duration) => Some(duration),
            AnswerOutcome::Skipped | AnswerOutcome::Interrupted | AnswerOutcome::Unreached => None,
        }
    }
}

/// One question paired with its outcome, by question index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    /// 1-based question number.
    pub number: usize,
    pub question: String,
    pub outcome: AnswerOutcome,
}

/// Read-only record of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    started_at: DateTime<Utc>,
    total_elapsed: Duration,
    reason: FinishReason,
    entries: Vec<ResultEntry>,
}

impl SessionResult {
    /// Build a result from the final running state.
    ///
    /// Each question is paired with the duration recorded for its own slot, so a
    /// skipped question never shifts later durations onto earlier questions.
    #[must_use]
    pub fn from_state(
        started_at: DateTime<Utc>,
        questions: &QuestionSet,
        state: &SessionState,
        finished_at: Instant,
        reason: FinishReason,
    ) -> Self {
        let current = state.current_index();
        let entries = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let outcome = match state.recorded_for(index) {
                    Some(duration) => AnswerOutcome::Recorded(duration),
                    None if index == current && state.is_timing() => AnswerOutcome::Interrupted,
                    None if index <= current => AnswerOutcome::Skipped,
                    None => AnswerOutcome::Unreached,
                };
                ResultEntry {
                    number: index + 1,
                    question: question.to_owned(),
                    outcome,
                }
            })
            .collect();

        Self {
            started_at,
            total_elapsed: state.elapsed(finished_at),
            reason,
            entries,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Wall time from session start to finish (not the sum of answers).
    #[must_use]
    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    #[must_use]
    pub fn reason(&self) -> FinishReason {
        self.reason
    }

    #[must_use]
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    /// Number of questions with a recorded duration.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.duration().is_some())
            .count()
    }

    #[must_use]
    pub fn total_answer_time(&self) -> Duration {
        self.entries
            .iter()
            .filter_map(|entry| entry.outcome.duration())
            .sum()
    }

    #[must_use]
    pub fn average_answer_time(&self) -> Option<Duration> {
        let count = u32::try_from(self.answered_count()).ok()?;
        if count == 0 {
            return None;
        }
        Some(self.total_answer_time() / count)
    }
}
