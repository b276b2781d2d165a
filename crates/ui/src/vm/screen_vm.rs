use std::time::{Duration, Instant};

use interview_core::model::SlotPhase;
use services::SessionController;

use crate::vm::summary_vm::{SummaryVm, map_summary};
use crate::vm::time_fmt::{format_clock, format_seconds};

/// Everything the running screen draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningVm {
    pub question_label: String,
    pub question_text: String,
    pub answer_label: String,
    pub remaining_label: String,
    pub timer_running: bool,
    pub toggle_label: &'static str,
    pub can_toggle: bool,
    pub advance_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionScreen {
    Running(RunningVm),
    Finished(SummaryVm),
}

/// Project the session into what should be on screen at `now`.
#[must_use]
pub fn project(session: &SessionController, now: Instant) -> SessionScreen {
    if let Some(result) = session.result() {
        return SessionScreen::Finished(map_summary(result));
    }

    let progress = session.progress();
    let slot = session.slot_phase().unwrap_or(SlotPhase::Idle);
    let answer_label = match slot {
        SlotPhase::Idle => format!("Answer time: {}", format_seconds(Duration::ZERO)),
        SlotPhase::Timing => format!(
            "Answer time: {}",
            format_seconds(session.answer_elapsed(now).unwrap_or_default())
        ),
        SlotPhase::Stopped => format!(
            "Final answer time: {}",
            format_seconds(session.current_recorded().unwrap_or_default())
        ),
    };

    SessionScreen::Running(RunningVm {
        question_label: format!("Question {} of {}", progress.current_number, progress.total),
        question_text: session.current_question().unwrap_or_default().to_string(),
        answer_label,
        remaining_label: format!("Remaining: {}", format_clock(session.remaining(now))),
        timer_running: slot == SlotPhase::Timing,
        toggle_label: match slot {
            SlotPhase::Idle => "Start timer",
            SlotPhase::Timing => "Stop timer",
            SlotPhase::Stopped => "Answer recorded",
        },
        can_toggle: slot != SlotPhase::Stopped,
        advance_label: if session.is_last_question() {
            "Finish"
        } else {
            "Next question"
        },
    })
}
