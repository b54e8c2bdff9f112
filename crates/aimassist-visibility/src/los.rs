//! Line-of-sight calculation against a heightfield.
//!
//! Uses stepped ray traversal: the segment is sampled at a fixed interval
//! and the ray height is compared with the ground height at each sample.

use glam::Vec3;

use aimassist_core::constants::{LOS_MAX_SAMPLES, LOS_SAMPLE_INTERVAL};

use crate::grid::HeightGrid;

/// Anything that can answer "is the segment from `from` to `to` clear?".
pub trait LineOfSight {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool;
}

/// No occluders at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSky;

impl LineOfSight for OpenSky {
    fn line_of_sight(&self, _from: Vec3, _to: Vec3) -> bool {
        true
    }
}

impl LineOfSight for HeightGrid {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool {
        has_line_of_sight(self, from, to)
    }
}

/// Check line-of-sight between two world points over the heightfield.
///
/// Endpoints themselves are not tested, so an aim point resting on the
/// ground is still visible. Samples outside the grid never block.
/// Non-finite endpoints are never visible.
pub fn has_line_of_sight(grid: &HeightGrid, from: Vec3, to: Vec3) -> bool {
    let delta = to - from;
    if !delta.is_finite() {
        return false;
    }
    let horiz_dist = delta.truncate().length();
    if !horiz_dist.is_finite() {
        return false;
    }

    if horiz_dist < LOS_SAMPLE_INTERVAL {
        return true; // Too close for terrain to matter
    }

    let num_samples =
        ((horiz_dist / LOS_SAMPLE_INTERVAL).ceil() as usize).clamp(2, LOS_MAX_SAMPLES);

    for i in 1..num_samples {
        let t = i as f32 / num_samples as f32;
        let sample = from + delta * t;

        let Some(ground) = grid.height_at(sample.truncate()) else {
            continue;
        };

        if ground > sample.z {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// 100m x 100m flat grid centred on the origin.
    fn make_flat_grid() -> HeightGrid {
        HeightGrid::flat(Vec2::new(-50.0, -50.0), 1.0, 100, 100, 0.0)
    }

    /// Same grid with a 10m wall across y = 0.
    fn make_wall_grid() -> HeightGrid {
        let mut grid = make_flat_grid();
        for col in 0..100 {
            for row in 49..52 {
                grid.set_height(row, col, 10.0);
            }
        }
        grid
    }

    #[test]
    fn test_los_flat_terrain() {
        let grid = make_flat_grid();
        let from = Vec3::new(0.0, -40.0, 1.7);
        let to = Vec3::new(0.0, 40.0, 1.0);
        assert!(has_line_of_sight(&grid, from, to), "LOS should be clear on flat terrain");
    }

    #[test]
    fn test_los_blocked_by_wall() {
        let grid = make_wall_grid();
        let from = Vec3::new(0.0, -40.0, 1.7);
        let to = Vec3::new(0.0, 40.0, 1.7);
        assert!(!has_line_of_sight(&grid, from, to), "LOS should be blocked by the wall");
    }

    #[test]
    fn test_los_over_wall() {
        let grid = make_wall_grid();
        let from = Vec3::new(0.0, -40.0, 20.0);
        let to = Vec3::new(0.0, 40.0, 20.0);
        assert!(has_line_of_sight(&grid, from, to));
    }

    #[test]
    fn test_los_close_range() {
        let grid = make_wall_grid();
        let from = Vec3::new(0.0, 0.0, 0.0);
        let to = Vec3::new(0.1, 0.1, 0.0);
        assert!(has_line_of_sight(&grid, from, to));
    }

    #[test]
    fn test_los_outside_grid_never_blocks() {
        let grid = make_wall_grid();
        let from = Vec3::new(200.0, -40.0, 1.0);
        let to = Vec3::new(200.0, 40.0, 1.0);
        assert!(has_line_of_sight(&grid, from, to));
    }

    #[test]
    fn test_los_non_finite_target_is_hidden() {
        let grid = make_flat_grid();
        assert!(!has_line_of_sight(&grid, Vec3::ZERO, Vec3::new(f32::INFINITY, 0.0, 1.0)));
        assert!(!has_line_of_sight(&grid, Vec3::ZERO, Vec3::new(f32::NAN, 5.0, 1.0)));
        // Finite but huge: horizontal length overflows f32
        assert!(!has_line_of_sight(&grid, Vec3::ZERO, Vec3::new(3e38, 3e38, 1.0)));
    }

    #[test]
    fn test_los_very_long_ray_is_capped() {
        // ~2e9 samples uncapped; returns promptly and never blocks off-grid
        let grid = make_flat_grid();
        let from = Vec3::new(0.0, 0.0, 1.0);
        let to = Vec3::new(1.0e9, 0.0, 1.0);
        assert!(has_line_of_sight(&grid, from, to));
    }

    #[test]
    fn test_open_sky() {
        assert!(OpenSky.line_of_sight(Vec3::ZERO, Vec3::splat(1000.0)));
    }
}
