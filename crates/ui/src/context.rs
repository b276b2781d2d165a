use std::sync::Arc;

use interview_core::model::QuestionSet;
use services::InterviewLoopService;

pub trait UiApp: Send + Sync {
    fn questions(&self) -> QuestionSet;
    fn interview_loop(&self) -> Arc<InterviewLoopService>;

    /// Close the window once the user is done with the summary.
    fn request_exit(&self);
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    questions: QuestionSet,
    interview_loop: Arc<InterviewLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        let questions = app.questions();
        let interview_loop = app.interview_loop();
        Self {
            app,
            questions,
            interview_loop,
        }
    }

    #[must_use]
    pub fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }

    #[must_use]
    pub fn interview_loop(&self) -> Arc<InterviewLoopService> {
        Arc::clone(&self.interview_loop)
    }

    pub fn request_exit(&self) {
        self.app.request_exit();
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
