//! Fundamental identifiers and candidate types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Opaque handle to a world entity (shooter or candidate).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

/// Opaque faction/team identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionTag(pub u16);

/// The entity firing the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shooter {
    pub id: EntityId,
    pub faction: FactionTag,
}

/// A potential auto-aim target as exposed by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetCandidate {
    pub id: EntityId,
    /// World-space point to aim at.
    pub aim_point: Vec3,
    pub faction: FactionTag,
}

/// A candidate that survived every rejection test, with its heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: EntityId,
    pub aim_point: Vec3,
    /// Weighted sum of distance and cone scores (>= 0 with non-negative weights).
    pub score: f32,
}

impl Shooter {
    pub fn new(id: EntityId, faction: FactionTag) -> Self {
        Self { id, faction }
    }
}

impl TargetCandidate {
    pub fn new(id: EntityId, aim_point: Vec3, faction: FactionTag) -> Self {
        Self {
            id,
            aim_point,
            faction,
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
