//! Visibility for AIMASSIST.
//!
//! Heightfield line-of-sight and the amortized visibility table that
//! answers the scorer's `can_see` queries.

pub use aimassist_core as core;

pub mod grid;
pub mod los;
pub mod vis_table;

// Re-export key types for convenience.
pub use grid::HeightGrid;
pub use los::{has_line_of_sight, LineOfSight, OpenSky};
pub use vis_table::VisTable;
