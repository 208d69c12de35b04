use std::time::Duration;

use super::policy::{PollDecision, PollPolicy};

/// State of one binding's browser-side lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// Waiting for both elements; the attempt counter is 1-based.
    Polling(u32),
    /// Click bridge installed. Terminal.
    Bound,
    /// Attempt budget exhausted without finding both elements. Terminal.
    TimedOut,
}

impl BindingState {
    /// Apply one existence-check result. Returns the next state and, when the
    /// poll was rescheduled, the delay before the next check.
    pub fn advance(self, policy: &PollPolicy, found: bool) -> (BindingState, Option<Duration>) {
        match self {
            BindingState::Polling(attempt) => match policy.decide(attempt, found) {
                PollDecision::Bind => (BindingState::Bound, None),
                PollDecision::RetryAfter(delay) => (BindingState::Polling(attempt + 1), Some(delay)),
                PollDecision::TimeOut => (BindingState::TimedOut, None),
            },
            terminal => (terminal, None),
        }
    }

    /// True for `Bound` and `TimedOut`; neither transitions further.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BindingState::Bound | BindingState::TimedOut)
    }
}
