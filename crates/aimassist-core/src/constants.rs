//! Auto-aim tuning parameters and defaults.

// --- Cone defaults (normal aim) ---

/// Minimum assist range (meters).
pub const DEFAULT_MIN_DISTANCE: f32 = 5.0;

/// Maximum assist range (meters).
pub const DEFAULT_MAX_DISTANCE: f32 = 200.0;

/// Half-angle of the eligibility cone (degrees).
pub const DEFAULT_OUTER_HALF_ANGLE_DEG: f32 = 10.0;

/// Half-angle of the adjustment budget cone (degrees).
pub const DEFAULT_INNER_HALF_ANGLE_DEG: f32 = 2.5;

// --- Cone defaults (zoomed aim) ---

/// Zoomed aim reaches further but bends less.
pub const DEFAULT_ZOOMED_MAX_DISTANCE: f32 = 300.0;

pub const DEFAULT_ZOOMED_OUTER_HALF_ANGLE_DEG: f32 = 5.0;

pub const DEFAULT_ZOOMED_INNER_HALF_ANGLE_DEG: f32 = 1.25;

// --- Scoring ---

/// Score multiplier for the distance heuristic.
pub const DEFAULT_DISTANCE_WEIGHT: f32 = 2.0;

/// Score multiplier for the cone (centrality) heuristic.
pub const DEFAULT_CONE_WEIGHT: f32 = 1.0;

/// Floor for score denominators.
pub const SCORE_EPSILON: f32 = f32::EPSILON;

// --- Direction adjustment ---

/// Floor for the blend denominator `1 - dot`.
pub const BLEND_EPSILON: f32 = 1e-6;

/// Angular slack (radians) allowed on the inner-cone bound before the
/// exact rotation fallback kicks in.
pub const ANGLE_TOLERANCE: f32 = 1e-4;

// --- Visibility ---

/// Frames of latency the scorer accepts on a visibility answer.
pub const DEFAULT_VISIBILITY_BUDGET: u32 = 5;

/// Line-of-sight tests the visibility table runs per frame.
pub const VIS_CHECKS_PER_FRAME: usize = 4;

/// Line-of-sight sampling interval (meters).
pub const LOS_SAMPLE_INTERVAL: f32 = 0.5;

/// Upper bound on samples per line-of-sight test; longer rays sample coarser.
pub const LOS_MAX_SAMPLES: usize = 2048;
