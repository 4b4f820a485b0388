//! Numeric extents on the index and value axes.

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Range covering a single value.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Union two ranges if both are finite.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        })
    }

    /// Fold an optional accumulator with another range.
    pub(crate) fn merge(acc: Option<Self>, other: Self) -> Option<Self> {
        match acc {
            None => Some(other),
            Some(existing) => Self::union(existing, other).or(Some(existing)),
        }
    }

    /// Fold an optional accumulator with a single value.
    pub(crate) fn include(acc: Option<Self>, value: f64) -> Option<Self> {
        if !value.is_finite() {
            return acc;
        }
        match acc {
            None => Some(Self::point(value)),
            Some(mut range) => {
                range.expand_to_include(value);
                Some(range)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_swaps_reversed_bounds() {
        let range = Range::new(8.0, 2.0);
        assert_eq!(range.min, 2.0);
        assert_eq!(range.max, 8.0);
        assert_eq!(range.span(), 6.0);
    }

    #[test]
    fn include_skips_non_finite_values() {
        let acc = Range::include(None, f64::NAN);
        assert!(acc.is_none());
        let acc = Range::include(acc, 3.0);
        let acc = Range::include(acc, f64::INFINITY);
        let acc = Range::include(acc, -1.0);
        assert_eq!(acc, Some(Range::new(-1.0, 3.0)));
    }

    #[test]
    fn merge_unions_ranges() {
        let acc = Range::merge(None, Range::new(1.0, 4.0));
        let acc = Range::merge(acc, Range::new(0.0, 2.0));
        assert_eq!(acc, Some(Range::new(0.0, 4.0)));
    }
}
