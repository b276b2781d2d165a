use dioxus::prelude::*;

use crate::vm::SummaryVm;

/// Result page: one row per question, in question order.
#[component]
pub fn SummaryView(summary: SummaryVm, on_exit: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "page summary-page",
            h2 { "Interview finished" }
            p { class: "summary-reason", "{summary.reason_label}" }
            p { class: "summary-started", "Started: {summary.started_at_str}" }

            ol { class: "summary-list",
                for row in summary.rows.iter() {
                    li { class: "summary-row", key: "{row.number}",
                        span { class: "summary-question", "Q{row.number}. {row.question}" }
                        span { class: "summary-outcome {row.outcome_class}", "{row.outcome_label}" }
                    }
                }
            }

            div { class: "summary-totals",
                p { "{summary.answered_label}" }
                if let Some(average) = summary.average_label.as_ref() {
                    p { "{average}" }
                }
                p { "{summary.total_label}" }
            }

            if let Some(on_exit) = on_exit {
                button {
                    class: "btn btn-primary",
                    id: "summary-exit",
                    r#type: "button",
                    onclick: move |_| on_exit.call(()),
                    "Exit"
                }
            }
        }
    }
}
