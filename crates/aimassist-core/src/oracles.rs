//! Capabilities the host game provides to the auto-aim subsystem.
//!
//! The scorer only ever reads through these traits. Implementations that
//! cannot answer a query must fail closed: report "not visible" or a
//! non-friendly relation, never panic.

use crate::enums::Reaction;
use crate::types::{EntityId, FactionTag, TargetCandidate};

/// Live set of potential targets.
pub trait CandidateRegistry {
    /// Current candidates. Finite and restartable; order is the tie-break order.
    fn candidates(&self) -> Box<dyn Iterator<Item = TargetCandidate> + '_>;
}

/// Faction relationship lookup.
pub trait RelationPolicy {
    fn relation(&self, from: FactionTag, to: FactionTag) -> Reaction;
}

/// Line-of-sight answers, possibly stale.
///
/// `budget_hint` is the number of frames of staleness the caller tolerates.
/// Implementations may rate-limit their internal checks and return an older
/// answer; an entity that has never been checked reads as not visible.
pub trait VisibilityOracle {
    fn can_see(&mut self, shooter: EntityId, candidate: EntityId, budget_hint: u32) -> bool;
}

/// Game-mode rules consulted by the friendly-fire exception and suppression flag.
pub trait MatchRules {
    /// Competitive / multiplayer mode disables the self-target exception.
    fn is_competitive(&self) -> bool;

    fn is_self(&self, candidate: EntityId, shooter: EntityId) -> bool {
        candidate == shooter
    }

    /// Whether the shooter already has a self-selected target.
    fn has_manual_target(&self, _shooter: EntityId) -> bool {
        false
    }
}

impl CandidateRegistry for [TargetCandidate] {
    fn candidates(&self) -> Box<dyn Iterator<Item = TargetCandidate> + '_> {
        Box::new(self.iter().copied())
    }
}

impl CandidateRegistry for Vec<TargetCandidate> {
    fn candidates(&self) -> Box<dyn Iterator<Item = TargetCandidate> + '_> {
        self.as_slice().candidates()
    }
}
