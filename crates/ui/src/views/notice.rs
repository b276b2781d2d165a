use dioxus::prelude::*;

use crate::vm::Notice;

#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = notice.kind.class();
    rsx! {
        div { class: "{class}", role: "alert", id: "session-notice",
            div { class: "notice__body",
                strong { class: "notice__title", "{notice.title}" }
                p { class: "notice__message", "{notice.message}" }
            }
            button {
                class: "btn btn-ghost notice__dismiss",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
