//! Auto-aim engine for AIMASSIST.
//!
//! Scores registry candidates against the shooter's aim, bends the firing
//! direction toward the winner within the inner-cone budget, and hosts the
//! logic as a fire-mode plugin gated by activation state.

pub mod activation;
pub mod adjust;
pub mod diagnostics;
pub mod plugin;
pub mod registry;
pub mod relations;
pub mod rules;
pub mod scenario;
pub mod scorer;
pub mod world_setup;

pub use aimassist_core as core;
pub use plugin::{AutoAimPlugin, FireMode, FireModePlugin};
pub use scorer::{ScoringContext, ScoringParams, ShotOrigin};
