//! Spawn helpers for populating a registry with targets.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use aimassist_core::types::{EntityId, FactionTag};
use aimassist_visibility::{LineOfSight, VisTable};

use crate::registry::TargetRegistry;

/// Spawn `count` targets uniformly over a disc of `radius` around `center`,
/// with a small random height offset. Factions are assigned round-robin.
pub fn scatter_targets(
    registry: &mut TargetRegistry,
    rng: &mut ChaCha8Rng,
    count: usize,
    center: Vec3,
    radius: f32,
    factions: &[FactionTag],
) -> Vec<EntityId> {
    let fallback = [FactionTag::default()];
    let factions = if factions.is_empty() {
        &fallback[..]
    } else {
        factions
    };

    (0..count)
        .map(|i| {
            let bearing = rng.gen_range(0.0..TAU);
            // sqrt for uniform area density
            let r = radius * rng.gen::<f32>().sqrt();
            let z = rng.gen_range(-1.0..1.0);
            let offset = Vec3::new(r * bearing.sin(), r * bearing.cos(), z);
            registry.spawn(center + offset, factions[i % factions.len()])
        })
        .collect()
}

/// Spawn one target at `range` meters along `bearing` (radians from +Y toward +X).
pub fn spawn_at_bearing(
    registry: &mut TargetRegistry,
    origin: Vec3,
    bearing: f32,
    range: f32,
    faction: FactionTag,
) -> EntityId {
    let offset = Vec3::new(range * bearing.sin(), range * bearing.cos(), 0.0);
    registry.spawn(origin + offset, faction)
}

/// Despawn a target and drop its cached visibility answers.
pub fn despawn_target<L: LineOfSight>(
    registry: &mut TargetRegistry,
    visibility: &mut VisTable<L>,
    id: EntityId,
) -> bool {
    let removed = registry.despawn(id);
    visibility.forget(id);
    removed
}
