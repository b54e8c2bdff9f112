//! Enumeration types used throughout the subsystem.

use serde::{Deserialize, Serialize};

/// How one faction regards another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    #[default]
    Hostile,
    Neutral,
    Friendly,
}

/// Which cone configuration is active for a shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AimState {
    /// Hip fire / default aim.
    #[default]
    Normal,
    /// Aiming down sights or scoped.
    Zoomed,
}

/// Auto-aim activation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationState {
    #[default]
    Disabled,
    Enabled,
}

/// Why a candidate was not considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Friendly to the shooter and not an allowed self-target.
    Friendly,
    /// Closer than the cone's minimum distance.
    TooClose,
    /// Farther than the cone's maximum distance.
    TooFar,
    /// Outside the outer (eligibility) cone.
    OutsideCone,
    /// The visibility oracle reported no line of sight.
    NotVisible,
}

/// Why an assist call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Plugin is not activated, or no cone is enabled.
    Inactive,
    /// The cone for the current aim state is disabled.
    ConeDisabled,
    /// The shooter already has a self-selected target.
    ManualTarget,
    /// Firing direction has zero length.
    DegenerateDirection,
    /// No candidate survived scoring.
    NoCandidate,
}

impl AimState {
    pub fn from_zoomed(zoomed: bool) -> Self {
        if zoomed {
            AimState::Zoomed
        } else {
            AimState::Normal
        }
    }
}
