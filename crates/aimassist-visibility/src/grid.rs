//! HeightGrid: regular heightfield with bilinear elevation queries.

use glam::Vec2;

/// Heightfield sampled on a regular grid in the XY plane (Z up).
#[derive(Debug, Clone)]
pub struct HeightGrid {
    /// World-space XY of cell (0, 0).
    origin: Vec2,
    /// Cell edge length (meters).
    cell_size: f32,
    width: usize,
    height: usize,
    /// Heights in meters, row-major (row = Y index, col = X index).
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Create a grid from pre-loaded heights.
    ///
    /// Returns `None` if the buffer does not match `width * height`, the grid
    /// is empty, or the cell size is not positive.
    pub fn new(
        origin: Vec2,
        cell_size: f32,
        width: usize,
        height: usize,
        heights: Vec<f32>,
    ) -> Option<Self> {
        if width == 0 || height == 0 || heights.len() != width * height || cell_size <= 0.0 {
            return None;
        }
        Some(Self {
            origin,
            cell_size,
            width,
            height,
            heights,
        })
    }

    /// Flat grid at the given height.
    pub fn flat(origin: Vec2, cell_size: f32, width: usize, height: usize, level: f32) -> Self {
        Self {
            origin,
            cell_size: cell_size.max(f32::EPSILON),
            width: width.max(1),
            height: height.max(1),
            heights: vec![level; width.max(1) * height.max(1)],
        }
    }

    /// Overwrite the height of one cell. Out-of-range writes are ignored.
    pub fn set_height(&mut self, row: usize, col: usize, value: f32) {
        if row < self.height && col < self.width {
            self.heights[row * self.width + col] = value;
        }
    }

    /// Convert world XY to fractional (row, col). None outside the grid.
    fn world_to_grid(&self, xy: Vec2) -> Option<(f32, f32)> {
        let local = (xy - self.origin) / self.cell_size;
        let (col, row) = (local.x, local.y);
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        Some((row, col))
    }

    fn raw_height(&self, row: usize, col: usize) -> f32 {
        if row >= self.height || col >= self.width {
            return 0.0;
        }
        self.heights[row * self.width + col]
    }

    /// Ground height under a world XY position, bilinearly interpolated.
    /// Returns None outside the grid.
    pub fn height_at(&self, xy: Vec2) -> Option<f32> {
        let (row, col) = self.world_to_grid(xy)?;
        Some(self.bilinear(row, col))
    }

    fn bilinear(&self, row: f32, col: f32) -> f32 {
        let r0 = row.floor() as usize;
        let c0 = col.floor() as usize;
        let r1 = (r0 + 1).min(self.height - 1);
        let c1 = (c0 + 1).min(self.width - 1);

        let fr = row - r0 as f32;
        let fc = col - c0 as f32;

        let top = self.raw_height(r0, c0) * (1.0 - fc) + self.raw_height(r0, c1) * fc;
        let bot = self.raw_height(r1, c0) * (1.0 - fc) + self.raw_height(r1, c1) * fc;
        top * (1.0 - fr) + bot * fr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_mismatched_buffer() {
        assert!(HeightGrid::new(Vec2::ZERO, 1.0, 4, 4, vec![0.0; 15]).is_none());
        assert!(HeightGrid::new(Vec2::ZERO, 0.0, 4, 4, vec![0.0; 16]).is_none());
        assert!(HeightGrid::new(Vec2::ZERO, 1.0, 4, 4, vec![0.0; 16]).is_some());
    }

    #[test]
    fn test_height_outside_grid_is_none() {
        let grid = HeightGrid::flat(Vec2::ZERO, 1.0, 10, 10, 3.0);
        assert_eq!(grid.height_at(Vec2::new(5.0, 5.0)), Some(3.0));
        assert_eq!(grid.height_at(Vec2::new(-0.5, 5.0)), None);
        assert_eq!(grid.height_at(Vec2::new(5.0, 10.0)), None);
    }

    #[test]
    fn test_bilinear_interpolates_between_cells() {
        let mut grid = HeightGrid::flat(Vec2::ZERO, 2.0, 4, 4, 0.0);
        grid.set_height(0, 1, 10.0);
        // Halfway between col 0 (0m) and col 1 (10m) on row 0
        let h = grid.height_at(Vec2::new(1.0, 0.0)).unwrap();
        assert!((h - 5.0).abs() < 1e-5, "expected 5.0, got {h}");
    }
}
