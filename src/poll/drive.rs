//! Poll loop: run the binding state machine until bound or timed out.
//!
//! The generated browser script is the production form of this loop; the
//! drivers here run the same schedule against a `PageDom` seam so the backoff
//! contract is testable without a browser.

use std::time::Duration;

use super::policy::PollPolicy;
use super::state::BindingState;

/// Page-side seam the driver polls and binds through.
pub trait PageDom {
    /// True when both the trigger element and the target file input exist.
    fn elements_present(&mut self) -> bool;

    /// Hide the upload container and attach the forwarding click listener.
    /// Only called once, on the transition to `Bound`.
    fn install_bridge(&mut self);
}

/// Sleep seam between checks so tests can drive the schedule with a fake clock.
pub trait Sleep {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock sleeper for blocking callers.
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Run the poll loop to a terminal state, sleeping between checks.
pub fn drive_blocking(
    policy: &PollPolicy,
    dom: &mut dyn PageDom,
    sleep: &mut dyn Sleep,
) -> BindingState {
    let mut state = BindingState::Polling(1);
    sleep.sleep(policy.initial_delay());
    loop {
        let found = dom.elements_present();
        let (next, delay) = state.advance(policy, found);
        state = next;
        match state {
            BindingState::Bound => {
                dom.install_bridge();
                tracing::info!("successfully linked component to uploader");
                return state;
            }
            BindingState::TimedOut => {
                tracing::warn!("could not bind component to uploader: not all elements found in time");
                return state;
            }
            BindingState::Polling(_) => {
                if let Some(delay) = delay {
                    sleep.sleep(delay);
                }
            }
        }
    }
}

/// Async form of [`drive_blocking`] on the tokio timer, for hosts that poll a
/// headless page from an event loop. Paused-clock test runtimes drive it
/// through the whole schedule instantly.
pub async fn drive(policy: &PollPolicy, dom: &mut dyn PageDom) -> BindingState {
    let mut state = BindingState::Polling(1);
    tokio::time::sleep(policy.initial_delay()).await;
    loop {
        let found = dom.elements_present();
        let (next, delay) = state.advance(policy, found);
        state = next;
        match state {
            BindingState::Bound => {
                dom.install_bridge();
                tracing::info!("successfully linked component to uploader");
                return state;
            }
            BindingState::TimedOut => {
                tracing::warn!("could not bind component to uploader: not all elements found in time");
                return state;
            }
            BindingState::Polling(_) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
