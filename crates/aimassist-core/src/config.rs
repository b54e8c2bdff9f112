//! Auto-aim configuration: raw designer parameters and the validated cones
//! the scorer consumes.
//!
//! Raw parameters are authored in degrees and deserialized from JSON. They are
//! converted once into radian-based [`ConeSettings`], which are read-only
//! afterwards. Invalid cones never fail loading; they come out disabled.

use std::f32::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::AimState;

/// Errors raised while reading auto-aim parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read auto-aim params: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed auto-aim params: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Designer-facing cone parameters for one aim state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    /// Minimum target range (meters).
    pub min_distance: f32,
    /// Maximum target range (meters).
    pub max_distance: f32,
    /// Half-angle of the eligibility cone (degrees).
    pub outer_half_angle_deg: f32,
    /// Half-angle of the adjustment budget (degrees).
    pub inner_half_angle_deg: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            outer_half_angle_deg: DEFAULT_OUTER_HALF_ANGLE_DEG,
            inner_half_angle_deg: DEFAULT_INNER_HALF_ANGLE_DEG,
        }
    }
}

impl ConeParams {
    /// Default parameters for zoomed aim.
    pub fn zoomed() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_ZOOMED_MAX_DISTANCE,
            outer_half_angle_deg: DEFAULT_ZOOMED_OUTER_HALF_ANGLE_DEG,
            inner_half_angle_deg: DEFAULT_ZOOMED_INNER_HALF_ANGLE_DEG,
        }
    }

    /// All-zero parameters, the conventional way to switch a cone off.
    pub fn off() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: 0.0,
            outer_half_angle_deg: 0.0,
            inner_half_angle_deg: 0.0,
        }
    }

    fn is_off(&self) -> bool {
        *self == Self::off()
    }
}

/// Validated cone used by the scorer and the adjuster. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeSettings {
    /// `outer_half_angle >= inner_half_angle && max_distance > min_distance`.
    pub enabled: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Candidate eligibility cone half-angle, in `[0, PI]`.
    pub outer_half_angle: f32,
    /// Adjustment budget half-angle, in `[0, PI]`.
    pub inner_half_angle: f32,
}

impl ConeSettings {
    /// Build a cone from radian values. Distances are clamped to `>= 0` and
    /// angles to `[0, PI]`; any non-finite input yields a disabled cone.
    pub fn new(
        min_distance: f32,
        max_distance: f32,
        outer_half_angle: f32,
        inner_half_angle: f32,
    ) -> Self {
        let values = [min_distance, max_distance, outer_half_angle, inner_half_angle];
        if values.iter().any(|v| !v.is_finite()) {
            tracing::warn!(?values, "non-finite auto-aim cone parameters, cone disabled");
            return Self::disabled();
        }

        let min_distance = min_distance.max(0.0);
        let max_distance = max_distance.max(0.0);
        let outer_half_angle = outer_half_angle.clamp(0.0, PI);
        let inner_half_angle = inner_half_angle.clamp(0.0, PI);

        Self {
            enabled: outer_half_angle >= inner_half_angle && max_distance > min_distance,
            min_distance,
            max_distance,
            outer_half_angle,
            inner_half_angle,
        }
    }

    /// Convert designer parameters (degrees) into a validated cone.
    pub fn from_params(params: &ConeParams) -> Self {
        let cone = Self::new(
            params.min_distance,
            params.max_distance,
            params.outer_half_angle_deg.to_radians(),
            params.inner_half_angle_deg.to_radians(),
        );
        if !cone.enabled && !params.is_off() {
            tracing::warn!(
                min = params.min_distance,
                max = params.max_distance,
                outer_deg = params.outer_half_angle_deg,
                inner_deg = params.inner_half_angle_deg,
                "inconsistent auto-aim cone, cone disabled"
            );
        }
        cone
    }

    /// A cone that never accepts anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_distance: 0.0,
            max_distance: 0.0,
            outer_half_angle: 0.0,
            inner_half_angle: 0.0,
        }
    }

    pub fn min_distance_sq(&self) -> f32 {
        self.min_distance * self.min_distance
    }

    pub fn max_distance_sq(&self) -> f32 {
        self.max_distance * self.max_distance
    }
}

/// The pair of cones owned by one fire mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeSet {
    pub normal: ConeSettings,
    pub zoomed: ConeSettings,
}

impl ConeSet {
    pub fn new(normal: ConeSettings, zoomed: ConeSettings) -> Self {
        Self { normal, zoomed }
    }

    /// Cone for the given aim state.
    pub fn for_state(&self, state: AimState) -> &ConeSettings {
        match state {
            AimState::Normal => &self.normal,
            AimState::Zoomed => &self.zoomed,
        }
    }

    /// Cone for a shot, selected by the zoom flag.
    pub fn select(&self, zoomed: bool) -> &ConeSettings {
        self.for_state(AimState::from_zoomed(zoomed))
    }

    /// Whether either cone can ever assist.
    pub fn any_enabled(&self) -> bool {
        self.normal.enabled || self.zoomed.enabled
    }
}

/// Complete auto-aim parameter block for one fire mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoAimParams {
    pub normal: ConeParams,
    pub zoomed: ConeParams,
    /// Weight of the distance heuristic in the final score.
    pub distance_weight: f32,
    /// Weight of the cone (centrality) heuristic in the final score.
    pub cone_weight: f32,
    /// Frames of staleness tolerated on visibility answers.
    pub visibility_budget: u32,
    /// Skip assistance while the shooter holds a manual target.
    pub suppress_with_manual_target: bool,
    /// Score candidates every tick for diagnostics output.
    pub debug_every_tick: bool,
}

impl Default for AutoAimParams {
    fn default() -> Self {
        Self {
            normal: ConeParams::default(),
            zoomed: ConeParams::zoomed(),
            distance_weight: DEFAULT_DISTANCE_WEIGHT,
            cone_weight: DEFAULT_CONE_WEIGHT,
            visibility_budget: DEFAULT_VISIBILITY_BUDGET,
            suppress_with_manual_target: false,
            debug_every_tick: false,
        }
    }
}

impl AutoAimParams {
    /// Parse parameters from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON parameter file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Validated cones for both aim states.
    pub fn cone_set(&self) -> ConeSet {
        ConeSet::new(
            ConeSettings::from_params(&self.normal),
            ConeSettings::from_params(&self.zoomed),
        )
    }
}
