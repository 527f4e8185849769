//! 2D grid of absolute heights decoded from a capture.

/// `resolution * resolution` grid of absolute world-space heights,
/// stored x-major: cell `(x, y)` lives at index `x * resolution + y`,
/// matching the capture readback order.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    resolution: usize,
    values: Vec<f32>,
}

impl HeightGrid {
    /// Create a zero-filled grid.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            values: vec![0.0; resolution * resolution],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(resolution: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut grid = Self::new(resolution);
        for x in 0..resolution {
            for y in 0..resolution {
                grid.values[x * resolution + y] = f(x, y);
            }
        }
        grid
    }

    /// Cells per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Height at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[x * self.resolution + y]
    }

    /// Overwrite the height at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, height: f32) {
        self.values[x * self.resolution + y] = height;
    }

    /// Flat x-major view of all cells.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_zeroed() {
        let grid = HeightGrid::new(4);
        assert_eq!(grid.resolution(), 4);
        assert_eq!(grid.values().len(), 16);
        assert!(grid.values().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_x_major_addressing() {
        let grid = HeightGrid::from_fn(3, |x, y| (x * 10 + y) as f32);
        assert_eq!(grid.get(0, 0), 0.0);
        assert_eq!(grid.get(2, 1), 21.0);
        assert_eq!(grid.values()[2 * 3 + 1], 21.0);
    }

    #[test]
    fn test_set_round_trips() {
        let mut grid = HeightGrid::new(2);
        grid.set(1, 0, 7.5);
        assert_eq!(grid.get(1, 0), 7.5);
        assert_eq!(grid.get(0, 1), 0.0);
    }
}
