#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::Task;
use dioxus::document::eval;
use dioxus::prelude::*;
use services::{InterviewLoopService, Tick, TickChain};

use crate::context::AppContext;
use crate::views::{NoticeBanner, SummaryView};
use crate::vm::{RunningVm, SessionEffect, SessionIntent, SessionScreen, SessionVm};

fn focus_target(finished: bool) -> &'static str {
    if finished { "summary-exit" } else { "session-root" }
}

fn cancel_task(mut slot: Signal<Option<Task>>) {
    if let Some(task) = slot.write().take() {
        task.cancel();
    }
}

fn spawn_answer_ticks(
    mut vm: Signal<SessionVm>,
    service: Arc<InterviewLoopService>,
) -> Task {
    spawn(async move {
        let interval = service.interval(TickChain::Answer);
        loop {
            tokio::time::sleep(interval).await;
            if vm.write().answer_tick(&service) == Tick::Stop {
                break;
            }
        }
    })
}

#[component]
pub fn SessionView() -> Element {
    let ctx = use_context::<AppContext>();
    let interview_loop = ctx.interview_loop();

    let vm = {
        let interview_loop = Arc::clone(&interview_loop);
        let questions = ctx.questions();
        use_signal(move || SessionVm::start(&interview_loop, questions))
    };
    let answer_task = use_signal(|| None::<Task>);
    let mut last_focus = use_signal(|| None::<bool>);

    // The countdown chain runs for the lifetime of the view and ends the
    // session when the limit is reached.
    {
        let interview_loop = Arc::clone(&interview_loop);
        use_hook(move || {
            let mut vm = vm;
            spawn(async move {
                let interval = interview_loop.interval(TickChain::Countdown);
                loop {
                    tokio::time::sleep(interval).await;
                    if vm.write().countdown_tick(&interview_loop) == Tick::Stop {
                        tracing::debug!("countdown task ended");
                        cancel_task(answer_task);
                        break;
                    }
                }
            })
        });
    }

    let dispatch = {
        let interview_loop = Arc::clone(&interview_loop);
        let ctx = ctx.clone();
        use_callback(move |intent: SessionIntent| {
            let mut vm = vm;
            let mut answer_task = answer_task;
            let effect = vm.write().apply(&interview_loop, intent);
            tracing::debug!(?intent, ?effect, "session intent applied");
            match effect {
                SessionEffect::StartAnswerTicks => {
                    let task = spawn_answer_ticks(vm, Arc::clone(&interview_loop));
                    if let Some(previous) = answer_task.write().replace(task) {
                        previous.cancel();
                    }
                }
                SessionEffect::StopAnswerTicks | SessionEffect::Finished => {
                    cancel_task(answer_task);
                }
                SessionEffect::Exit => ctx.request_exit(),
                SessionEffect::None => {}
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SessionTestHandles>() {
                handles.register(dispatch, vm, answer_task);
            }
        }
    }

    use_effect(move || {
        let finished = vm.read().is_finished();
        if last_focus() == Some(finished) {
            return;
        }
        last_focus.set(Some(finished));
        let target = focus_target(finished);
        let js = format!("document.getElementById({target:?})?.focus();");
        let _ = eval(&js);
    });

    let on_key = move |evt: KeyboardEvent| {
        let finished = vm.read().is_finished();
        if evt.data.code() == Code::Space {
            evt.prevent_default();
            if !finished {
                dispatch.call(SessionIntent::ToggleTimer);
            }
            return;
        }
        match evt.data.key() {
            Key::Enter => {
                evt.prevent_default();
                dispatch.call(if finished {
                    SessionIntent::Exit
                } else {
                    SessionIntent::Advance
                });
            }
            Key::Escape => {
                evt.prevent_default();
                if vm.read().notice().is_some() {
                    dispatch.call(SessionIntent::DismissNotice);
                } else {
                    dispatch.call(SessionIntent::Exit);
                }
            }
            _ => {}
        }
    };

    let screen = vm.read().screen();
    let notice = vm.read().notice().cloned();

    rsx! {
        div { class: "page session-page", id: "session-root", tabindex: "0", onkeydown: on_key,
            match screen {
                SessionScreen::Running(running) => rsx! {
                    if let Some(notice) = notice {
                        NoticeBanner {
                            notice,
                            on_dismiss: move |()| dispatch.call(SessionIntent::DismissNotice),
                        }
                    }
                    RunningPanel {
                        running,
                        on_toggle: move |()| dispatch.call(SessionIntent::ToggleTimer),
                        on_advance: move |()| dispatch.call(SessionIntent::Advance),
                    }
                },
                SessionScreen::Finished(summary) => rsx! {
                    SummaryView {
                        summary,
                        on_exit: move |()| dispatch.call(SessionIntent::Exit),
                    }
                },
            }
        }
    }
}

#[component]
fn RunningPanel(
    running: RunningVm,
    on_toggle: EventHandler<()>,
    on_advance: EventHandler<()>,
) -> Element {
    let timer_class = if running.timer_running {
        "session-answer session-answer--running"
    } else {
        "session-answer"
    };

    rsx! {
        header { class: "session-header",
            span { class: "session-progress", "{running.question_label}" }
            span {
                class: "session-remaining",
                id: "session-remaining",
                "{running.remaining_label}"
            }
        }
        p { class: "session-question", id: "session-question", "{running.question_text}" }
        p { class: "{timer_class}", id: "session-answer", "{running.answer_label}" }
        div { class: "session-actions",
            button {
                class: "btn btn-primary",
                id: "session-toggle",
                r#type: "button",
                disabled: !running.can_toggle,
                onclick: move |_| on_toggle.call(()),
                "{running.toggle_label}"
            }
            button {
                class: "btn btn-secondary",
                id: "session-advance",
                r#type: "button",
                onclick: move |_| on_advance.call(()),
                "{running.advance_label}"
            }
        }
        p { class: "session-hint", "Space: start/stop timer · Enter: next question" }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SessionTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    vm: Rc<RefCell<Option<Signal<SessionVm>>>>,
    answer_task: Rc<RefCell<Option<Signal<Option<Task>>>>>,
}

#[cfg(test)]
impl SessionTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SessionIntent>,
        vm: Signal<SessionVm>,
        answer_task: Signal<Option<Task>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.answer_task.borrow_mut() = Some(answer_task);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("session dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<SessionVm> {
        (*self.vm.borrow()).expect("session vm registered")
    }

    pub(crate) fn answer_task(&self) -> Signal<Option<Task>> {
        (*self.answer_task.borrow()).expect("session answer task registered")
    }
}
