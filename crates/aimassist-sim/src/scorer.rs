//! Target scorer: ranks registry candidates and picks at most one.
//!
//! Candidates are filtered in order by relation, range, outer cone and
//! visibility, then scored on closeness and centrality. Linear scan over the
//! registry; candidate counts are small (player-count class).

use glam::Vec3;

use aimassist_core::config::{AutoAimParams, ConeSet, ConeSettings};
use aimassist_core::constants::SCORE_EPSILON;
use aimassist_core::enums::{Reaction, RejectReason};
use aimassist_core::events::AimDiagnostic;
use aimassist_core::oracles::{CandidateRegistry, MatchRules, RelationPolicy, VisibilityOracle};
use aimassist_core::types::{ScoredCandidate, Shooter, TargetCandidate};

use crate::diagnostics::DiagnosticsSink;

/// The host-game capabilities consulted while scoring.
pub struct ScoringContext<'a> {
    pub registry: &'a dyn CandidateRegistry,
    pub relations: &'a dyn RelationPolicy,
    pub visibility: &'a mut dyn VisibilityOracle,
    pub rules: &'a dyn MatchRules,
}

/// Where a shot comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOrigin {
    pub shooter: Shooter,
    /// Muzzle / eye position in world space.
    pub position: Vec3,
    /// Selects the zoomed cone instead of the normal one.
    pub zoomed: bool,
}

/// Read-only scoring configuration of one fire mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    pub cones: ConeSet,
    pub distance_weight: f32,
    pub cone_weight: f32,
    /// Frames of staleness tolerated on visibility answers.
    pub visibility_budget: u32,
}

/// Heuristic breakdown for one candidate that passed the geometric filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub dist_score: f32,
    pub cone_score: f32,
    pub score: f32,
}

impl ShotOrigin {
    pub fn new(shooter: Shooter, position: Vec3, zoomed: bool) -> Self {
        Self {
            shooter,
            position,
            zoomed,
        }
    }
}

impl ScoringParams {
    pub fn from_params(params: &AutoAimParams) -> Self {
        Self {
            cones: params.cone_set(),
            distance_weight: params.distance_weight,
            cone_weight: params.cone_weight,
            visibility_budget: params.visibility_budget,
        }
    }
}

/// Angle between two unit vectors.
///
/// atan2 form: `acos(dot)` loses ~3e-4 rad near 0 and PI in f32.
pub fn angle_between_unit(a: Vec3, b: Vec3) -> f32 {
    a.cross(b).length().atan2(a.dot(b))
}

/// Unit direction and length of `v`, or `None` for zero or non-finite vectors.
///
/// Scales by the largest component first so huge finite vectors do not
/// overflow the squared length.
pub fn split_direction(v: Vec3) -> Option<(Vec3, f32)> {
    let scale = v.abs().max_element();
    if !(scale > 0.0) || !scale.is_finite() {
        return None;
    }
    let scaled = v / scale;
    let n = scaled.try_normalize()?;
    let len = scaled.length() * scale;
    len.is_finite().then_some((n, len))
}

/// Whether the relation policy lets the shooter target this candidate.
///
/// Hostile and Neutral are always eligible. Friendly is eligible only for the
/// shooter's own avatar, and only outside competitive play.
pub fn relation_allows(
    relations: &dyn RelationPolicy,
    rules: &dyn MatchRules,
    shooter: &Shooter,
    candidate: &TargetCandidate,
) -> bool {
    match relations.relation(shooter.faction, candidate.faction) {
        Reaction::Hostile | Reaction::Neutral => true,
        Reaction::Friendly => !rules.is_competitive() && rules.is_self(candidate.id, shooter.id),
    }
}

/// Range and cone tests plus scoring for one candidate.
///
/// `forward` must be normalized. Rejects when the squared range is outside
/// `[min², max²]` or the angle to the aim point is not strictly inside the
/// outer half-angle.
pub fn score_candidate(
    settings: &ConeSettings,
    distance_weight: f32,
    cone_weight: f32,
    shooter_pos: Vec3,
    forward: Vec3,
    aim_point: Vec3,
) -> Result<CandidateScore, RejectReason> {
    let to_target = aim_point - shooter_pos;
    let dist_sq = to_target.length_squared();
    if dist_sq < settings.min_distance_sq() {
        return Err(RejectReason::TooClose);
    }
    if dist_sq > settings.max_distance_sq() {
        return Err(RejectReason::TooFar);
    }

    // Aim point on top of the shooter has no direction
    let Some(to_target_dir) = to_target.try_normalize() else {
        return Err(RejectReason::OutsideCone);
    };
    let theta = angle_between_unit(forward, to_target_dir);
    if !(theta < settings.outer_half_angle) {
        return Err(RejectReason::OutsideCone);
    }

    let dist = dist_sq.sqrt();
    let dist_score = {
        let s = 1.0 - dist / settings.max_distance.max(SCORE_EPSILON);
        s * s
    };
    let cone_score = 1.0 - theta / settings.outer_half_angle.max(SCORE_EPSILON);

    Ok(CandidateScore {
        dist_score,
        cone_score,
        score: dist_score * distance_weight + cone_score * cone_weight,
    })
}

/// Pick the best candidate for a shot, or `None` if nothing qualifies.
///
/// Ties keep the first candidate in registry order.
pub fn score_and_select(
    ctx: &mut ScoringContext<'_>,
    params: &ScoringParams,
    origin: &ShotOrigin,
    shooter_forward: Vec3,
    sink: &mut dyn DiagnosticsSink,
) -> Option<ScoredCandidate> {
    let settings = params.cones.select(origin.zoomed);
    if !settings.enabled {
        return None;
    }
    let (forward, _) = split_direction(shooter_forward)?;
    let report = sink.enabled();

    let registry = ctx.registry;
    let mut best: Option<ScoredCandidate> = None;

    for candidate in registry.candidates() {
        let verdict = if !relation_allows(ctx.relations, ctx.rules, &origin.shooter, &candidate) {
            Err(RejectReason::Friendly)
        } else {
            score_candidate(
                settings,
                params.distance_weight,
                params.cone_weight,
                origin.position,
                forward,
                candidate.aim_point,
            )
            .and_then(|scored| {
                // Visibility last: it is the only query with a cost
                if ctx.visibility.can_see(
                    origin.shooter.id,
                    candidate.id,
                    params.visibility_budget,
                ) {
                    Ok(scored)
                } else {
                    Err(RejectReason::NotVisible)
                }
            })
        };

        let scored = match verdict {
            Ok(scored) => scored,
            Err(reason) => {
                tracing::trace!(id = %candidate.id, ?reason, "auto-aim candidate rejected");
                if report {
                    sink.record(AimDiagnostic::CandidateRejected {
                        id: candidate.id,
                        reason,
                    });
                }
                continue;
            }
        };

        if report {
            sink.record(AimDiagnostic::CandidateScored {
                id: candidate.id,
                dist_score: scored.dist_score,
                cone_score: scored.cone_score,
                score: scored.score,
            });
        }

        if best.map_or(true, |b| scored.score > b.score) {
            best = Some(ScoredCandidate {
                id: candidate.id,
                aim_point: candidate.aim_point,
                score: scored.score,
            });
        }
    }

    if let Some(best) = &best {
        tracing::debug!(id = %best.id, score = best.score, "auto-aim target selected");
        if report {
            sink.record(AimDiagnostic::TargetSelected {
                id: best.id,
                score: best.score,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cone() -> ConeSettings {
        ConeSettings::new(5.0, 200.0, 10f32.to_radians(), 2.5f32.to_radians())
    }

    #[test]
    fn test_split_direction() {
        let (n, len) = split_direction(Vec3::new(0.0, 3e20, 4e20)).unwrap();
        assert!((n - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
        assert!((len / 5e20 - 1.0).abs() < 1e-6);

        let (n, len) = split_direction(Vec3::new(3.0, 0.0, -4.0)).unwrap();
        assert!((n - Vec3::new(0.6, 0.0, -0.8)).length() < 1e-6);
        assert!((len - 5.0).abs() < 1e-6);

        assert!(split_direction(Vec3::ZERO).is_none());
        assert!(split_direction(Vec3::new(f32::NAN, 1.0, 0.0)).is_none());
        assert!(split_direction(Vec3::new(0.0, f32::INFINITY, 0.0)).is_none());
    }

    #[test]
    fn test_range_rejections() {
        let c = cone();
        let fwd = Vec3::Y;
        assert_eq!(
            score_candidate(&c, 1.0, 1.0, Vec3::ZERO, fwd, Vec3::new(0.0, 4.0, 0.0)),
            Err(RejectReason::TooClose)
        );
        assert_eq!(
            score_candidate(&c, 1.0, 1.0, Vec3::ZERO, fwd, Vec3::new(0.0, 201.0, 0.0)),
            Err(RejectReason::TooFar)
        );
        // Boundaries are inclusive
        assert!(score_candidate(&c, 1.0, 1.0, Vec3::ZERO, fwd, Vec3::new(0.0, 5.0, 0.0)).is_ok());
        assert!(score_candidate(&c, 1.0, 1.0, Vec3::ZERO, fwd, Vec3::new(0.0, 200.0, 0.0)).is_ok());
    }

    #[test]
    fn test_cone_rejection() {
        let c = cone();
        // 45 degrees off axis
        let result = score_candidate(&c, 1.0, 1.0, Vec3::ZERO, Vec3::Y, Vec3::new(50.0, 50.0, 0.0));
        assert_eq!(result, Err(RejectReason::OutsideCone));
    }

    #[test]
    fn test_zero_outer_cone_accepts_nothing() {
        let c = ConeSettings::new(0.0, 100.0, 0.0, 0.0);
        assert!(c.enabled);
        let result = score_candidate(&c, 1.0, 1.0, Vec3::ZERO, Vec3::Y, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(result, Err(RejectReason::OutsideCone));
    }

    #[test]
    fn test_aim_point_at_shooter_is_rejected() {
        let c = ConeSettings::new(0.0, 100.0, 0.5, 0.1);
        let result = score_candidate(&c, 1.0, 1.0, Vec3::ONE, Vec3::Y, Vec3::ONE);
        assert_eq!(result, Err(RejectReason::OutsideCone));
    }

    #[test]
    fn test_score_components() {
        let c = cone();
        // Dead ahead at 100m: dist_score = (1 - 0.5)^2, cone_score = 1
        let s = score_candidate(&c, 2.0, 1.0, Vec3::ZERO, Vec3::Y, Vec3::new(0.0, 100.0, 0.0))
            .unwrap();
        assert!((s.dist_score - 0.25).abs() < 1e-6);
        assert!((s.cone_score - 1.0).abs() < 1e-6);
        assert!((s.score - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_cone_score_falls_toward_boundary() {
        let c = cone();
        let near_axis = Vec3::new(1.0, 100.0, 0.0);
        let near_edge = Vec3::new(15.0, 100.0, 0.0); // ~8.5 degrees
        let a = score_candidate(&c, 0.0, 1.0, Vec3::ZERO, Vec3::Y, near_axis).unwrap();
        let b = score_candidate(&c, 0.0, 1.0, Vec3::ZERO, Vec3::Y, near_edge).unwrap();
        assert!(a.cone_score > b.cone_score);
        assert!(b.cone_score > 0.0 && b.cone_score < 0.2, "got {}", b.cone_score);
    }
}
