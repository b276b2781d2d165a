use std::time::{Duration, Instant};

use crate::time::elapsed_between;

/// A stopped answer timer for one question slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAnswer {
    pub index: usize,
    pub duration: Duration,
}

/// Timing sub-state of the question currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotPhase {
    Idle,
    Timing,
    Stopped,
}

/// Mutable record of a running session.
///
/// `answers` is append-only and holds at most one entry per question slot.
/// `active_timer_start` is present iff an answer timer is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    answers: Vec<RecordedAnswer>,
    active_timer_start: Option<Instant>,
    session_start: Instant,
    session_limit: Duration,
}

impl SessionState {
    #[must_use]
    pub fn new(session_start: Instant, session_limit: Duration) -> Self {
        Self {
            current_index: 0,
            answers: Vec::new(),
            active_timer_start: None,
            session_start,
            session_limit,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn is_timing(&self) -> bool {
        self.active_timer_start.is_some()
    }

    #[must_use]
    pub fn slot_phase(&self) -> SlotPhase {
        if self.is_timing() {
            SlotPhase::Timing
        } else if self.recorded_for(self.current_index).is_some() {
            SlotPhase::Stopped
        } else {
            SlotPhase::Idle
        }
    }

    /// Recorded duration for the given question slot, if its timer was stopped.
    #[must_use]
    pub fn recorded_for(&self, index: usize) -> Option<Duration> {
        self.answers
            .iter()
            .rev()
            .find(|answer| answer.index == index)
            .map(|answer| answer.duration)
    }

    /// Wall time since the session started.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        elapsed_between(self.session_start, now)
    }

    /// Time left before the session limit, never negative.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.session_limit.saturating_sub(self.elapsed(now))
    }

    /// Live elapsed time of the running answer timer.
    #[must_use]
    pub fn answer_elapsed(&self, now: Instant) -> Option<Duration> {
        self.active_timer_start
            .map(|start| elapsed_between(start, now))
    }

    /// Start the answer timer for the current slot.
    ///
    /// Returns false and leaves the state untouched unless the slot is `Idle`.
    pub fn start_timer(&mut self, now: Instant) -> bool {
        if self.slot_phase() != SlotPhase::Idle {
            return false;
        }
        self.active_timer_start = Some(now);
        true
    }

    /// Stop the answer timer and record exactly one duration for the current slot.
    ///
    /// Returns `None` if no timer was running.
    pub fn stop_timer(&mut self, now: Instant) -> Option<Duration> {
        let start = self.active_timer_start.take()?;
        let duration = elapsed_between(start, now);
        self.answers.push(RecordedAnswer {
            index: self.current_index,
            duration,
        });
        Some(duration)
    }

    /// Move to the next slot. Returns the new index, or `None` when a timer is
    /// running or the current slot is the last of `question_count`.
    pub fn move_next(&mut self, question_count: usize) -> Option<usize> {
        if self.is_timing() || self.current_index + 1 >= question_count {
            return None;
        }
        self.current_index += 1;
        Some(self.current_index)
    }
}
