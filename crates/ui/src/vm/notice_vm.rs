use std::time::Duration;

use services::SessionError;

use crate::vm::time_fmt::format_seconds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

impl NoticeKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Warning => "notice notice--warning",
        }
    }
}

/// Non-fatal message shown above the current question until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn answer_recorded(elapsed: Duration) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: "Answer complete".to_string(),
            message: format!("Answer time: {}", format_seconds(elapsed)),
        }
    }

    #[must_use]
    pub fn rejected(err: SessionError) -> Self {
        let title = match err {
            SessionError::TimerRunning => "Timer running",
            SessionError::AnswerAlreadyRecorded => "Answer already recorded",
            _ => "Session finished",
        };
        Self {
            kind: NoticeKind::Warning,
            title: title.to_string(),
            message: capitalize(&err.to_string()),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect::<String>() + "."
    })
}
