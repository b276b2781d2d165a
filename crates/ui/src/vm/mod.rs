mod notice_vm;
mod screen_vm;
mod session_vm;
mod summary_vm;
mod time_fmt;

pub use notice_vm::{Notice, NoticeKind};
pub use screen_vm::{RunningVm, SessionScreen, project};
pub use session_vm::{SessionEffect, SessionIntent, SessionVm};
pub use summary_vm::{SummaryRowVm, SummaryVm, map_summary};
pub use time_fmt::{format_clock, format_datetime, format_seconds};
