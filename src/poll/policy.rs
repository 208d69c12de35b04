use std::time::Duration;

use crate::config::PollConfig;

/// Decision returned by the polling policy for one existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    /// Both elements are present; install the click bridge now.
    Bind,
    /// Not all elements present yet; check again after the given delay.
    RetryAfter(Duration),
    /// Attempt budget exhausted; give up with a warning.
    TimeOut,
}

/// Linear-backoff polling policy for element lookup.
///
/// The first check runs one step after scheduling; a failed attempt n
/// reschedules after n × step (25 ms, 50 ms, 75 ms, ...). At the defaults the
/// schedule gives up after roughly eleven seconds.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    /// Maximum number of existence checks (including the first).
    pub max_attempts: u32,
    /// Backoff step; attempt n reschedules after n times this.
    pub delay_step: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            delay_step: Duration::from_millis(25),
        }
    }
}

impl PollPolicy {
    /// Build a policy from config overrides, clamping to usable minimums.
    pub fn from_config(cfg: &PollConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            delay_step: Duration::from_millis(cfg.delay_step_ms.max(1)),
        }
    }

    /// Delay before the very first existence check.
    pub fn initial_delay(&self) -> Duration {
        self.delay_step
    }

    /// Decide what happens after existence check `attempt` (1-based).
    pub fn decide(&self, attempt: u32, found: bool) -> PollDecision {
        if found {
            return PollDecision::Bind;
        }
        if attempt < self.max_attempts {
            PollDecision::RetryAfter(self.delay_step.saturating_mul(attempt))
        } else {
            PollDecision::TimeOut
        }
    }

    /// Worst-case wall time before giving up: the initial delay plus every
    /// backoff delay the schedule can produce.
    pub fn worst_case_wait(&self) -> Duration {
        let mut total = self.initial_delay();
        for attempt in 1..self.max_attempts {
            total += self.delay_step.saturating_mul(attempt);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_as_soon_as_elements_are_found() {
        let p = PollPolicy::default();
        assert_eq!(p.decide(1, true), PollDecision::Bind);
        assert_eq!(p.decide(29, true), PollDecision::Bind);
    }

    #[test]
    fn backoff_grows_linearly() {
        let p = PollPolicy::default();
        let d1 = match p.decide(1, false) {
            PollDecision::RetryAfter(d) => d,
            _ => panic!("expected retry"),
        };
        let d4 = match p.decide(4, false) {
            PollDecision::RetryAfter(d) => d,
            _ => panic!("expected retry"),
        };
        assert_eq!(d1, Duration::from_millis(25));
        assert_eq!(d4, Duration::from_millis(100));
    }

    #[test]
    fn respects_max_attempts() {
        let p = PollPolicy::default();
        assert!(matches!(p.decide(29, false), PollDecision::RetryAfter(_)));
        assert_eq!(p.decide(30, false), PollDecision::TimeOut);
        assert_eq!(p.decide(31, false), PollDecision::TimeOut);
    }

    #[test]
    fn worst_case_sums_the_whole_schedule() {
        let p = PollPolicy::default();
        // 25 ms before the first check, then 25, 50, ..., 725 ms.
        assert_eq!(p.worst_case_wait(), Duration::from_millis(10_900));
    }

    #[test]
    fn config_overrides_are_clamped() {
        let p = PollPolicy::from_config(&PollConfig {
            max_attempts: 0,
            delay_step_ms: 0,
        });
        assert_eq!(p.max_attempts, 1);
        assert_eq!(p.delay_step, Duration::from_millis(1));
    }
}
