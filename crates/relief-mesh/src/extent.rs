//! Vertical extent tracking for merged geometry.

/// Running minimum/maximum world-space elevation of everything an
/// accumulator has merged.
///
/// Invariant: the extent only ever widens. `min` never increases and
/// `max` never decreases across [`VerticalExtent::include`] calls. The
/// empty extent is `(+inf, -inf)` and is the only state in which
/// `max < min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalExtent {
    /// Lowest observed world-space elevation.
    pub min: f32,
    /// Highest observed world-space elevation.
    pub max: f32,
}

impl VerticalExtent {
    /// The extent before any vertex has been observed.
    pub const EMPTY: Self = Self {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Widen the extent to include an elevation.
    pub fn include(&mut self, elevation: f32) {
        self.min = self.min.min(elevation);
        self.max = self.max.max(elevation);
    }

    /// True while no elevation has been included.
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Height span `max - min`, or 0 for an empty or single-elevation extent.
    pub fn height(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Smallest extent covering both `self` and `other`.
    pub fn union(&self, other: &VerticalExtent) -> VerticalExtent {
        VerticalExtent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl Default for VerticalExtent {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_extent() {
        let extent = VerticalExtent::EMPTY;
        assert!(extent.is_empty());
        assert_eq!(extent.height(), 0.0);
    }

    #[test]
    fn test_include_widens_both_bounds() {
        let mut extent = VerticalExtent::EMPTY;
        extent.include(3.0);
        assert_eq!(extent.min, 3.0);
        assert_eq!(extent.max, 3.0);
        assert_eq!(extent.height(), 0.0, "single elevation spans zero height");

        extent.include(-2.0);
        extent.include(10.0);
        assert_eq!(extent.min, -2.0);
        assert_eq!(extent.max, 10.0);
        assert_eq!(extent.height(), 12.0);
    }

    #[test]
    fn test_monotonicity_over_arbitrary_sequence() {
        let mut extent = VerticalExtent::EMPTY;
        let mut prev = extent;
        for elevation in [5.0_f32, -1.0, 4.5, 100.0, -1.0, 0.0, 99.0] {
            extent.include(elevation);
            assert!(
                extent.min <= prev.min && extent.max >= prev.max,
                "extent must never shrink: {prev:?} -> {extent:?}"
            );
            prev = extent;
        }
    }

    #[test]
    fn test_union_covers_both() {
        let mut a = VerticalExtent::EMPTY;
        a.include(0.0);
        a.include(5.0);
        let mut b = VerticalExtent::EMPTY;
        b.include(-3.0);
        b.include(2.0);

        let u = a.union(&b);
        assert_eq!(u.min, -3.0);
        assert_eq!(u.max, 5.0);

        let with_empty = a.union(&VerticalExtent::EMPTY);
        assert_eq!(with_empty, a, "union with empty is identity");
    }
}
