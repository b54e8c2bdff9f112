//! Activation state machine: `Disabled <-> Enabled`.
//!
//! The only persistent state of the auto-aim subsystem. Activation succeeds
//! only when at least one cone can assist.

use aimassist_core::config::ConeSet;
use aimassist_core::enums::ActivationState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activation {
    state: ActivationState,
}

impl Activation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an activation request and return the resulting state.
    pub fn on_activate(&mut self, activate: bool, cones: &ConeSet) -> ActivationState {
        let next = if activate && cones.any_enabled() {
            ActivationState::Enabled
        } else {
            ActivationState::Disabled
        };
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "auto-aim activation changed");
        }
        self.state = next;
        next
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == ActivationState::Enabled
    }
}
