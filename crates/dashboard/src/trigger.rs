//! One-shot guard for the external processing trigger.
//!
//! The only permitted path is `NotStarted → InFlight → {Succeeded | Failed}`.
//! There is no transition back to `NotStarted` within a session, so a
//! settled trigger is never repeated regardless of how often the
//! processing flag is presented.

use serde::Serialize;

/// Lifecycle of the processing trigger within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerState {
    /// No attempt has been made yet.
    #[default]
    NotStarted,
    /// The single outbound request is in flight.
    InFlight,
    /// The backend accepted the job.
    Succeeded,
    /// The attempt failed (non-success status or transport fault).
    Failed,
}

impl TriggerState {
    /// Claim the single attempt.
    ///
    /// Transitions `NotStarted → InFlight` and returns `true`; from
    /// any other state nothing changes and `false` is returned.
    pub fn begin(&mut self) -> bool {
        if *self == TriggerState::NotStarted {
            *self = TriggerState::InFlight;
            true
        } else {
            false
        }
    }

    /// Record the outcome of the in-flight attempt.
    ///
    /// Only valid from `InFlight`; a no-op from every other state.
    pub fn settle(&mut self, success: bool) {
        if *self == TriggerState::InFlight {
            *self = if success {
                TriggerState::Succeeded
            } else {
                TriggerState::Failed
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_claims_the_attempt_once() {
        let mut state = TriggerState::default();
        assert!(state.begin());
        assert_eq!(state, TriggerState::InFlight);

        // A second claim is refused while in flight.
        assert!(!state.begin());
        assert_eq!(state, TriggerState::InFlight);
    }

    #[test]
    fn settle_success() {
        let mut state = TriggerState::default();
        state.begin();
        state.settle(true);
        assert_eq!(state, TriggerState::Succeeded);
    }

    #[test]
    fn settle_failure() {
        let mut state = TriggerState::default();
        state.begin();
        state.settle(false);
        assert_eq!(state, TriggerState::Failed);
    }

    #[test]
    fn settled_states_refuse_further_transitions() {
        for success in [true, false] {
            let mut state = TriggerState::default();
            state.begin();
            state.settle(success);
            let settled = state;

            assert!(!state.begin());
            state.settle(!success);
            assert_eq!(state, settled);
        }
    }

    #[test]
    fn settle_without_begin_is_a_no_op() {
        let mut state = TriggerState::default();
        state.settle(true);
        assert_eq!(state, TriggerState::NotStarted);
    }
}
