//! Candidate registry backed by a `hecs` world.
//!
//! Entities carry `Targetable`, `AimPoint` and `Faction` components. A
//! spawn-order index keeps iteration deterministic, which fixes the scorer's
//! tie-break order.

use glam::Vec3;
use hecs::{Entity, World};

use aimassist_core::components::{AimPoint, Faction, Targetable};
use aimassist_core::oracles::CandidateRegistry;
use aimassist_core::types::{EntityId, FactionTag, Shooter, TargetCandidate};

#[derive(Default)]
pub struct TargetRegistry {
    world: World,
    order: Vec<(EntityId, Entity)>,
    next_id: u32,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a targetable entity and return its stable id.
    pub fn spawn(&mut self, aim_point: Vec3, faction: FactionTag) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let entity = self
            .world
            .spawn((Targetable { id }, AimPoint(aim_point), Faction(faction)));
        self.order.push((id, entity));
        id
    }

    /// Remove an entity. Returns false if it was not present.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let Some(idx) = self.order.iter().position(|(eid, _)| *eid == id) else {
            return false;
        };
        let (_, entity) = self.order.remove(idx);
        self.world.despawn(entity).is_ok()
    }

    /// Move an entity's aim point. Returns false if it was not present.
    pub fn set_aim_point(&mut self, id: EntityId, aim_point: Vec3) -> bool {
        let Some(entity) = self.entity(id) else {
            return false;
        };
        match self.world.get::<&mut AimPoint>(entity) {
            Ok(mut aim) => {
                aim.0 = aim_point;
                true
            }
            Err(_) => false,
        }
    }

    pub fn aim_point(&self, id: EntityId) -> Option<Vec3> {
        let entity = self.entity(id)?;
        self.world.get::<&AimPoint>(entity).ok().map(|a| a.0)
    }

    pub fn faction(&self, id: EntityId) -> Option<FactionTag> {
        let entity = self.entity(id)?;
        self.world.get::<&Faction>(entity).ok().map(|f| f.0)
    }

    /// The entity as a shooter, for when a registered avatar fires.
    pub fn shooter(&self, id: EntityId) -> Option<Shooter> {
        self.faction(id).map(|faction| Shooter::new(id, faction))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn entity(&self, id: EntityId) -> Option<Entity> {
        self.order
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, entity)| *entity)
    }
}

impl CandidateRegistry for TargetRegistry {
    fn candidates(&self) -> Box<dyn Iterator<Item = TargetCandidate> + '_> {
        Box::new(self.order.iter().filter_map(|(id, entity)| {
            let aim = self.world.get::<&AimPoint>(*entity).ok()?;
            let faction = self.world.get::<&Faction>(*entity).ok()?;
            Some(TargetCandidate::new(*id, aim.0, faction.0))
        }))
    }
}
