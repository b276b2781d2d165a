use std::time::Duration;

use interview_core::model::SessionSettings;

/// What a periodic chain should do after handling one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Sleep one interval and tick again.
    Continue,
    /// Stop rescheduling.
    Stop,
}

/// The two independent periodic chains a running session owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickChain {
    /// Session countdown; lives for the whole running phase.
    Countdown,
    /// Live answer readout; lives while an answer timer runs.
    Answer,
}

impl TickChain {
    #[must_use]
    pub fn interval(self, settings: &SessionSettings) -> Duration {
        match self {
            TickChain::Countdown => settings.countdown_interval(),
            TickChain::Answer => settings.answer_refresh_interval(),
        }
    }
}
