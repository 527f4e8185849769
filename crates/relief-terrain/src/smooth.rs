//! Post-composition heightmap smoothing.

use relief_bake::HeightGrid;

/// Blend every cell toward the average of its 4-neighborhood.
///
/// Runs once after composition, before the terrain is considered final;
/// it softens the hard steps the one-hot composition leaves at building
/// outlines. `strength` 0 is a no-op, 1 replaces each cell with the
/// neighborhood average. Edge cells average over the neighbors they have.
pub fn smooth_heightmap(grid: &mut HeightGrid, iterations: u32, strength: f32) {
    let resolution = grid.resolution();
    if resolution == 0 || iterations == 0 || strength <= 0.0 {
        return;
    }
    let strength = strength.min(1.0);

    for _ in 0..iterations {
        let snapshot = grid.clone();
        for x in 0..resolution {
            for y in 0..resolution {
                let mut sum = 0.0;
                let mut count = 0.0;
                if x > 0 {
                    sum += snapshot.get(x - 1, y);
                    count += 1.0;
                }
                if x + 1 < resolution {
                    sum += snapshot.get(x + 1, y);
                    count += 1.0;
                }
                if y > 0 {
                    sum += snapshot.get(x, y - 1);
                    count += 1.0;
                }
                if y + 1 < resolution {
                    sum += snapshot.get(x, y + 1);
                    count += 1.0;
                }
                if count == 0.0 {
                    continue;
                }
                let current = snapshot.get(x, y);
                grid.set(x, y, current + (sum / count - current) * strength);
            }
        }
    }
}
