use interview_core::model::{AnswerOutcome, FinishReason, SessionResult};

use crate::vm::time_fmt::{format_datetime, format_seconds};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRowVm {
    pub number: usize,
    pub question: String,
    pub outcome_label: String,
    pub outcome_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub started_at_str: String,
    pub reason_label: &'static str,
    pub total_label: String,
    pub answered_label: String,
    pub average_label: Option<String>,
    pub rows: Vec<SummaryRowVm>,
}

impl From<&SessionResult> for SummaryVm {
    fn from(result: &SessionResult) -> Self {
        let rows = result
            .entries()
            .iter()
            .map(|entry| {
                let (outcome_label, outcome_class) = match entry.outcome {
                    AnswerOutcome::Recorded(duration) => {
                        (format_seconds(duration), "summary-outcome--recorded")
                    }
                    AnswerOutcome::Skipped => ("Not timed".to_string(), "summary-outcome--skipped"),
                    AnswerOutcome::Interrupted => {
                        ("Interrupted".to_string(), "summary-outcome--interrupted")
                    }
                    AnswerOutcome::Unreached => {
                        ("Not reached".to_string(), "summary-outcome--unreached")
                    }
                };
                SummaryRowVm {
                    number: entry.number,
                    question: entry.question.clone(),
                    outcome_label,
                    outcome_class,
                }
            })
            .collect();

        Self {
            started_at_str: format_datetime(result.started_at()),
            reason_label: match result.reason() {
                FinishReason::Completed => "All questions done",
                FinishReason::TimeExpired => "Time is up",
            },
            total_label: format!("Total time: {}", format_seconds(result.total_elapsed())),
            answered_label: format!(
                "Answered {} of {}",
                result.answered_count(),
                result.entries().len()
            ),
            average_label: result
                .average_answer_time()
                .map(|avg| format!("Average answer: {}", format_seconds(avg))),
            rows,
        }
    }
}

#[must_use]
pub fn map_summary(result: &SessionResult) -> SummaryVm {
    SummaryVm::from(result)
}
