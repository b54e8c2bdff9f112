//! Scenario runner: one shot evaluated against an authored or seeded world.
//!
//! Authored scenarios are JSON and carry fixed visibility flags per
//! candidate. Synthetic scenarios scatter targets with a seeded RNG and use
//! the amortized [`VisTable`] over open sky, so runs are reproducible.

use std::collections::HashSet;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use aimassist_core::config::AutoAimParams;
use aimassist_core::events::AimDiagnostic;
use aimassist_core::oracles::{CandidateRegistry, VisibilityOracle};
use aimassist_core::types::{EntityId, FactionTag, Shooter, TargetCandidate};
use aimassist_visibility::{OpenSky, VisTable};

use crate::adjust::Adjustment;
use crate::plugin::AutoAimPlugin;
use crate::registry::TargetRegistry;
use crate::relations::{FactionTable, RelationEntry};
use crate::rules::SessionRules;
use crate::scorer::{angle_between_unit, split_direction, ScoringContext, ShotOrigin};
use crate::world_setup::scatter_targets;

/// Synthetic targets are scattered around this point ahead of the shooter.
const SYNTHETIC_CENTER: Vec3 = Vec3::new(0.0, 100.0, 0.0);
const SYNTHETIC_RADIUS: f32 = 60.0;
/// Max aim jitter off +Y for synthetic shots (radians).
const SYNTHETIC_AIM_JITTER: f32 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShooterSpec {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub faction: FactionTag,
    pub position: Vec3,
    /// Firing direction before assistance; need not be normalized.
    pub direction: Vec3,
    #[serde(default)]
    pub zoomed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSpec {
    pub id: EntityId,
    pub aim_point: Vec3,
    #[serde(default)]
    pub faction: FactionTag,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

/// A single-shot scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub shooter: ShooterSpec,
    #[serde(default)]
    pub params: AutoAimParams,
    #[serde(default)]
    pub competitive: bool,
    /// Relation overrides on top of "same faction friendly, else hostile".
    #[serde(default)]
    pub relations: Vec<RelationEntry>,
    #[serde(default)]
    pub candidates: Vec<CandidateSpec>,
}

/// What happened to the shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub input: Vec3,
    pub output: Vec3,
    pub deviation_deg: f32,
    pub selected: Option<EntityId>,
    pub diagnostics: Vec<AimDiagnostic>,
}

/// Visibility fixed up front: every candidate not listed as hidden is visible.
#[derive(Debug, Clone, Default)]
pub struct FixedVisibility {
    hidden: HashSet<EntityId>,
}

impl FixedVisibility {
    pub fn new(hidden: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            hidden: hidden.into_iter().collect(),
        }
    }
}

impl VisibilityOracle for FixedVisibility {
    fn can_see(&mut self, _shooter: EntityId, candidate: EntityId, _budget_hint: u32) -> bool {
        !self.hidden.contains(&candidate)
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fire one shot through an activated auto-aim plugin.
    pub fn run(&self) -> ScenarioOutcome {
        let candidates: Vec<TargetCandidate> = self
            .candidates
            .iter()
            .map(|c| TargetCandidate::new(c.id, c.aim_point, c.faction))
            .collect();
        let relations = FactionTable::from_entries(&self.relations);
        let rules = SessionRules::new(self.competitive);
        let mut visibility =
            FixedVisibility::new(self.candidates.iter().filter(|c| !c.visible).map(|c| c.id));

        let origin = ShotOrigin::new(
            Shooter::new(self.shooter.id, self.shooter.faction),
            self.shooter.position,
            self.shooter.zoomed,
        );
        let mut ctx = ScoringContext {
            registry: &candidates,
            relations: &relations,
            visibility: &mut visibility,
            rules: &rules,
        };
        fire(&self.params, &mut ctx, &origin, self.shooter.direction)
    }
}

/// Seeded scatter of `count` targets in three factions; the shooter is in
/// faction 0 and aims roughly along +Y.
pub fn run_synthetic(seed: u64, count: usize) -> ScenarioOutcome {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut registry = TargetRegistry::new();

    let own = FactionTag(0);
    let shooter_id = registry.spawn(Vec3::ZERO, own);
    scatter_targets(
        &mut registry,
        &mut rng,
        count,
        SYNTHETIC_CENTER,
        SYNTHETIC_RADIUS,
        &[own, FactionTag(1), FactionTag(2)],
    );

    let yaw = rng.gen_range(-SYNTHETIC_AIM_JITTER..SYNTHETIC_AIM_JITTER);
    let pitch = rng.gen_range(-SYNTHETIC_AIM_JITTER..SYNTHETIC_AIM_JITTER);
    let direction = Vec3::new(yaw.sin(), yaw.cos(), pitch.sin());

    let params = AutoAimParams::default();
    let relations = FactionTable::new();
    let rules = SessionRules::new(false);
    let mut visibility = VisTable::new(OpenSky);
    warm_visibility(&mut visibility, &registry, shooter_id, params.visibility_budget);

    let origin = ShotOrigin::new(Shooter::new(shooter_id, own), Vec3::ZERO, false);
    let mut ctx = ScoringContext {
        registry: &registry,
        relations: &relations,
        visibility: &mut visibility,
        rules: &rules,
    };
    fire(&params, &mut ctx, &origin, direction)
}

/// Request every (shooter, candidate) pair and tick until the queue drains.
pub fn warm_visibility<L>(
    table: &mut VisTable<L>,
    registry: &TargetRegistry,
    shooter: EntityId,
    budget: u32,
) where
    L: aimassist_visibility::LineOfSight,
{
    for candidate in registry.candidates() {
        table.can_see(shooter, candidate.id, budget);
    }
    while table.pending_len() > 0 {
        table.update(|id| registry.aim_point(id));
    }
}

fn fire(
    params: &AutoAimParams,
    ctx: &mut ScoringContext<'_>,
    origin: &ShotOrigin,
    input: Vec3,
) -> ScenarioOutcome {
    let mut plugin = AutoAimPlugin::new(params).with_sink(Vec::<AimDiagnostic>::new());
    plugin.activate(true);

    let mut output = input;
    let adjustment: Option<Adjustment> = plugin.alter_firing_direction(ctx, origin, &mut output);

    let diagnostics = plugin.sink().clone();
    let selected = diagnostics.iter().find_map(|d| match d {
        AimDiagnostic::TargetSelected { id, .. } => Some(*id),
        _ => None,
    });
    let deviation_deg = match (split_direction(input), split_direction(output)) {
        (Some((a, _)), Some((b, _))) if adjustment.is_some() => {
            angle_between_unit(a, b).to_degrees()
        }
        _ => 0.0,
    };

    ScenarioOutcome {
        input,
        output,
        deviation_deg,
        selected,
        diagnostics,
    }
}
