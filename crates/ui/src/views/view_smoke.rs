use std::time::Duration;

use dioxus::prelude::*;
use interview_core::model::{
    FinishReason, QuestionSet, SessionResult, SessionSettings, SessionState,
};
use interview_core::time::fixed_now;

use super::summary::{SummaryView, SummaryViewProps};
use super::test_harness::{drive_dom, setup_session_harness};
use crate::vm::{SessionIntent, map_summary};

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_renders_first_question() {
    let mut harness = setup_session_harness(
        &["Tell me about yourself.", "Why do you want this role?"],
        SessionSettings::default(),
    );

    harness.rebuild();
    let html = harness.render();
    for expected in [
        "Question 1 of 2",
        "Tell me about yourself.",
        "Remaining: 10:00",
        "Answer time: 0.00s",
        "Start timer",
        "Next question",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!harness.app.exit_requested());
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_uses_configured_limit() {
    let settings = SessionSettings::default()
        .with_session_limit(Duration::from_secs(90))
        .unwrap();
    let mut harness = setup_session_harness(&["Only question"], settings);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Remaining: 01:30"), "missing limit in {html}");
    assert!(html.contains("Finish"), "missing finish label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_drives_timer_through_to_exit() {
    let mut harness = setup_session_harness(&["Q1", "Q2"], SessionSettings::default());
    harness.rebuild();

    let dispatch = harness.session_handles.dispatch();
    let vm = harness.session_handles.vm();
    let answer_task = harness.session_handles.answer_task();

    harness.dom.in_runtime(|| dispatch.call(SessionIntent::ToggleTimer));
    drive_dom(&mut harness.dom);
    assert!(harness.dom.in_runtime(|| answer_task.peek().is_some()));
    assert!(harness.dom.in_runtime(|| vm.peek().timer_running()));
    let html = harness.render();
    assert!(html.contains("Stop timer"), "missing stop label in {html}");

    harness.dom.in_runtime(|| dispatch.call(SessionIntent::ToggleTimer));
    drive_dom(&mut harness.dom);
    assert!(harness.dom.in_runtime(|| answer_task.peek().is_none()));
    let html = harness.render();
    assert!(html.contains("Answer complete"), "missing notice in {html}");

    harness.dom.in_runtime(|| dispatch.call(SessionIntent::Advance));
    drive_dom(&mut harness.dom);
    assert!(harness.render().contains("Question 2 of 2"));
    assert!(!harness.app.exit_requested());

    harness.dom.in_runtime(|| dispatch.call(SessionIntent::Advance));
    drive_dom(&mut harness.dom);
    assert!(harness.dom.in_runtime(|| vm.peek().is_finished()));
    assert!(harness.dom.in_runtime(|| answer_task.peek().is_none()));
    let html = harness.render();
    assert!(html.contains("Interview finished"), "missing summary in {html}");
    assert!(html.contains("Answered 1 of 2"), "missing count in {html}");

    harness.dom.in_runtime(|| dispatch.call(SessionIntent::Exit));
    drive_dom(&mut harness.dom);
    assert!(harness.app.exit_requested());
}

#[tokio::test(flavor = "current_thread")]
async fn summary_view_smoke_renders_rows() {
    let t0 = std::time::Instant::now();
    let questions = QuestionSet::new(["Q1", "Q2"]).unwrap();
    let mut state = SessionState::new(t0, Duration::from_secs(600));
    state.start_timer(t0);
    state.stop_timer(t0 + Duration::from_millis(5000));
    state.move_next(2);
    state.start_timer(t0 + Duration::from_secs(6));
    state.stop_timer(t0 + Duration::from_millis(9500));
    let result = SessionResult::from_state(
        fixed_now(),
        &questions,
        &state,
        t0 + Duration::from_secs(10),
        FinishReason::Completed,
    );

    let mut dom = VirtualDom::new_with_props(
        SummaryView,
        SummaryViewProps {
            summary: map_summary(&result),
            on_exit: None,
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    for expected in [
        "Interview finished",
        "Q1. Q1",
        "5.00s",
        "3.50s",
        "Answered 2 of 2",
        "Total time: 10.00s",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}
