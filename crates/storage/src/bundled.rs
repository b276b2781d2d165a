/// Questions used when no question file is configured.
pub const DEFAULT_QUESTIONS: &[&str] = &[
    "Please introduce yourself.",
    "Why did you apply to this company?",
    "What are your strengths and weaknesses?",
    "What are your career plans going forward?",
    "Tell us about a time you overcame a difficult situation.",
];
