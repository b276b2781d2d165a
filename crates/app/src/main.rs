use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use interview_core::model::{QuestionSet, SessionSettings};
use services::{Clock, InterviewLoopService, QuestionService};
use storage::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLimit { raw: String },
    InvalidQuestionsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLimit { raw } => write!(f, "invalid --limit-secs value: {raw}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    questions: QuestionSet,
    interview_loop: Arc<InterviewLoopService>,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }

    fn interview_loop(&self) -> Arc<InterviewLoopService> {
        Arc::clone(&self.interview_loop)
    }

    fn request_exit(&self) {
        tracing::info!("exit requested from summary");
        dioxus::desktop::window().close();
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    limit: Duration,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path.json>] [--limit-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question list");
    eprintln!("  --limit-secs 600");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INTERVIEW_QUESTIONS, INTERVIEW_LIMIT_SECS, RUST_LOG");
}

fn parse_limit(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ArgsError::InvalidLimit { raw })
}

fn parse_questions_path(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidQuestionsPath { raw });
    }
    Ok(PathBuf::from(raw))
}

impl Args {
    /// Flags win over environment variables, which win over defaults.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut questions = env("INTERVIEW_QUESTIONS")
            .map(parse_questions_path)
            .transpose()?;
        let mut limit = env("INTERVIEW_LIMIT_SECS")
            .map(parse_limit)
            .transpose()?
            .unwrap_or(SessionSettings::DEFAULT_SESSION_LIMIT);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(&mut args, "--questions")?;
                    questions = Some(parse_questions_path(value)?);
                }
                "--limit-secs" => {
                    let value = require_value(&mut args, "--limit-secs")?;
                    limit = parse_limit(value)?;
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self { questions, limit }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn load_questions(storage: &Storage) -> Result<QuestionSet, Box<dyn std::error::Error>> {
    let questions = QuestionService::new(Arc::clone(&storage.questions))
        .load()
        .await?;
    Ok(questions)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|_| print_usage())?;
    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let settings = SessionSettings::default().with_session_limit(args.limit)?;
    let storage = match args.questions.as_ref() {
        Some(path) => Storage::json_file(path),
        None => Storage::bundled(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let questions = runtime.block_on(load_questions(&storage))?;
    drop(runtime);

    tracing::info!(
        questions = questions.len(),
        source = ?args.questions,
        limit_secs = settings.session_limit().as_secs(),
        "launching interview window"
    );

    let app = DesktopApp {
        questions,
        interview_loop: Arc::new(InterviewLoopService::new(Clock::default_clock(), settings)),
    };
    let context = build_app_context(Arc::new(app));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Interview Timer")
            .with_inner_size(LogicalSize::new(600.0, 400.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
