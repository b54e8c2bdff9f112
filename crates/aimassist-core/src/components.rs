//! ECS components for registry entities.
//!
//! Components are plain data structs with no methods.
//! The registry in `aimassist-sim` owns the world they live in.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, FactionTag};

/// Marks an entity as an auto-aim candidate and carries its stable id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Targetable {
    pub id: EntityId,
}

/// World-space point the assist steers toward (usually torso centre).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AimPoint(pub Vec3);

/// Team allegiance of the entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Faction(pub FactionTag);
