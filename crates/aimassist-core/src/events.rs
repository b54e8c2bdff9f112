//! Diagnostics emitted by the scorer and adjuster for debug overlays and telemetry.

use serde::{Deserialize, Serialize};

use crate::enums::{RejectReason, SkipReason};
use crate::types::EntityId;

/// One step of an auto-aim evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AimDiagnostic {
    /// Candidate failed a filter.
    CandidateRejected { id: EntityId, reason: RejectReason },
    /// Candidate passed every filter and was scored.
    CandidateScored {
        id: EntityId,
        dist_score: f32,
        cone_score: f32,
        score: f32,
    },
    /// Best candidate of the evaluation.
    TargetSelected { id: EntityId, score: f32 },
    /// Firing direction was bent toward the selected target.
    DirectionAdjusted {
        id: EntityId,
        /// Angle between the input and output directions (radians).
        deviation_rad: f32,
        /// Whether the target was already inside the inner cone.
        snapped: bool,
    },
    /// The call produced no assist.
    AssistSkipped { reason: SkipReason },
}
