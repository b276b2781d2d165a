use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use interview_core::model::{QuestionSet, SessionSettings};
use interview_core::time::fixed_clock;
use services::InterviewLoopService;

use crate::context::{UiApp, build_app_context};
use crate::views::SessionView;
use crate::views::session::SessionTestHandles;

pub struct TestApp {
    questions: QuestionSet,
    interview_loop: Arc<InterviewLoopService>,
    exit_requested: AtomicBool,
}

impl TestApp {
    pub fn exit_requested(&self) -> bool {
        self.exit_requested.load(Ordering::Acquire)
    }
}

impl UiApp for TestApp {
    fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }

    fn interview_loop(&self) -> Arc<InterviewLoopService> {
        Arc::clone(&self.interview_loop)
    }

    fn request_exit(&self) {
        self.exit_requested.store(true, Ordering::Release);
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    session_handles: SessionTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SessionHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    let handles = props.session_handles.clone();
    use_context_provider(|| handles);
    rsx! { SessionView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
    pub session_handles: SessionTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Session view over a frozen clock, so timers never move during a render.
pub fn setup_session_harness(questions: &[&str], settings: SessionSettings) -> ViewHarness {
    let questions = QuestionSet::new(questions.iter().copied()).expect("valid questions");
    let app = Arc::new(TestApp {
        questions,
        interview_loop: Arc::new(InterviewLoopService::new(fixed_clock(), settings)),
        exit_requested: AtomicBool::new(false),
    });
    let session_handles = SessionTestHandles::default();
    let dom = VirtualDom::new_with_props(
        SessionHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
            session_handles: session_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        app,
        session_handles,
    }
}
