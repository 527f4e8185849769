//! Two-channel splat map weighting ground against building mass.

/// Per-cell `[ground, feature]` material weights.
///
/// After composition the weights are one-hot: exactly one channel is 1
/// and the other 0, never blended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplatWeights {
    /// Ground material weight.
    pub ground: f32,
    /// Building-mass material weight.
    pub feature: f32,
}

impl SplatWeights {
    /// Fully ground.
    pub const GROUND: Self = Self {
        ground: 1.0,
        feature: 0.0,
    };

    /// Fully building mass.
    pub const FEATURE: Self = Self {
        ground: 0.0,
        feature: 1.0,
    };

    /// True when exactly one channel is 1 and the other 0.
    pub fn is_one_hot(&self) -> bool {
        *self == Self::GROUND || *self == Self::FEATURE
    }
}

/// `resolution * resolution` grid of splat weights, x-major like
/// [`relief_bake::HeightGrid`].
#[derive(Clone, Debug, PartialEq)]
pub struct SplatMap {
    resolution: usize,
    weights: Vec<SplatWeights>,
}

impl SplatMap {
    /// Create an all-ground splat map.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            weights: vec![SplatWeights::GROUND; resolution * resolution],
        }
    }

    /// Cells per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Weights at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> SplatWeights {
        self.weights[x * self.resolution + y]
    }

    /// Overwrite the weights at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, weights: SplatWeights) {
        self.weights[x * self.resolution + y] = weights;
    }

    /// Flat x-major view of all cells.
    pub fn weights(&self) -> &[SplatWeights] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_one_hot() {
        assert!(SplatWeights::GROUND.is_one_hot());
        assert!(SplatWeights::FEATURE.is_one_hot());
        assert!(
            !SplatWeights {
                ground: 0.5,
                feature: 0.5
            }
            .is_one_hot(),
            "blended weights are not one-hot"
        );
    }

    #[test]
    fn test_new_map_is_all_ground() {
        let map = SplatMap::new(3);
        assert!(map.weights().iter().all(|w| *w == SplatWeights::GROUND));
    }

    #[test]
    fn test_set_get_addressing() {
        let mut map = SplatMap::new(2);
        map.set(1, 0, SplatWeights::FEATURE);
        assert_eq!(map.get(1, 0), SplatWeights::FEATURE);
        assert_eq!(map.get(0, 1), SplatWeights::GROUND);
    }
}
