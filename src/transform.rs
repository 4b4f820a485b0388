//! Mapping between axis indices and output slots.

use crate::config::Granularity;
use crate::error::{NormalizeError, Result};
use crate::view::Range;

/// Relative tolerance used to absorb floating error in slot arithmetic.
const SNAP_EPSILON: f64 = 1e-9;

/// Largest number of slots a grid may hold.
///
/// Every output row allocates this many slots, so a wider span is rejected
/// before anything is allocated.
pub const MAX_SLOTS: usize = 1 << 24;

/// Regular grid laid over the index axis.
///
/// Slot `i` stands for axis index `origin + i * granularity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    origin: f64,
    granularity: Granularity,
    slots: usize,
}

impl GridTransform {
    /// Create a grid whose slot 0 sits at `axis.min` and that covers `axis.max`.
    ///
    /// Fails with [`NormalizeError::InvalidOrigin`] when a bound is not finite
    /// or `axis.max` lies before `axis.min`, and with
    /// [`NormalizeError::TooManySlots`] when the span needs more than
    /// [`MAX_SLOTS`] slots.
    pub fn new(axis: Range, granularity: Granularity) -> Result<Self> {
        if !axis.is_finite() || axis.max < axis.min {
            return Err(NormalizeError::InvalidOrigin(axis.min));
        }
        let steps = snap(axis.span() / granularity.get()).floor();
        if steps.is_nan() || steps >= MAX_SLOTS as f64 {
            return Err(NormalizeError::TooManySlots {
                slots: steps + 1.0,
                limit: MAX_SLOTS,
            });
        }
        Ok(Self {
            origin: axis.min,
            granularity,
            slots: steps as usize + 1,
        })
    }

    /// Axis index of slot 0.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Slot width.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Number of slots in the grid.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Map an axis index to the nearest slot.
    ///
    /// Halves round up. Returns `None` for non-finite indices, indices before
    /// the origin, and indices that round past the final slot.
    pub fn index_to_slot(&self, index: f64) -> Option<usize> {
        if !index.is_finite() {
            return None;
        }
        let offset = snap((index - self.origin) / self.granularity.get());
        if offset < 0.0 {
            return None;
        }
        let slot = offset.round();
        if slot >= self.slots as f64 {
            return None;
        }
        Some(slot as usize)
    }

    /// Axis index a slot stands for.
    pub fn slot_to_index(&self, slot: usize) -> f64 {
        self.origin + slot as f64 * self.granularity.get()
    }
}

fn snap(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= SNAP_EPSILON * nearest.abs().max(1.0) {
        nearest
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(origin: f64, last: f64, granularity: f64) -> GridTransform {
        let axis = Range {
            min: origin,
            max: last,
        };
        GridTransform::new(axis, Granularity::new(granularity).unwrap()).unwrap()
    }

    #[test]
    fn slot_count_floors_the_span() {
        assert_eq!(grid(0.0, 7.0, 3.0).slots(), 3);
        assert_eq!(grid(1.0, 7.0, 3.0).slots(), 3);
        assert_eq!(grid(4.0, 8.0, 4.0).slots(), 2);
        assert_eq!(grid(5.0, 5.0, 2.0).slots(), 1);
    }

    #[test]
    fn index_rounds_to_nearest_slot() {
        let grid = grid(0.0, 7.0, 3.0);
        assert_eq!(grid.index_to_slot(1.0), Some(0));
        assert_eq!(grid.index_to_slot(4.0), Some(1));
        assert_eq!(grid.index_to_slot(4.5), Some(2));
        assert_eq!(grid.index_to_slot(7.0), Some(2));
    }

    #[test]
    fn index_rounding_past_last_slot_has_no_slot() {
        let grid = grid(0.0, 5.0, 2.0);
        assert_eq!(grid.slots(), 3);
        assert_eq!(grid.index_to_slot(4.0), Some(2));
        assert_eq!(grid.index_to_slot(4.9), Some(2));
        assert_eq!(grid.index_to_slot(5.0), None);
    }

    #[test]
    fn oversized_span_is_rejected() {
        let axis = Range {
            min: 0.0,
            max: 1e20,
        };
        let err = GridTransform::new(axis, Granularity::UNIT).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::TooManySlots {
                limit: MAX_SLOTS,
                ..
            }
        ));

        let widest = Range {
            min: 0.0,
            max: (MAX_SLOTS - 1) as f64,
        };
        assert_eq!(
            GridTransform::new(widest, Granularity::UNIT).unwrap().slots(),
            MAX_SLOTS
        );
        let too_wide = Range {
            min: 0.0,
            max: MAX_SLOTS as f64,
        };
        assert!(GridTransform::new(too_wide, Granularity::UNIT).is_err());
    }

    #[test]
    fn rejects_indices_outside_the_axis() {
        let grid = grid(2.0, 10.0, 2.0);
        assert_eq!(grid.index_to_slot(1.0), None);
        assert_eq!(grid.index_to_slot(f64::NAN), None);
        let inverted = Range { min: 3.0, max: 1.0 };
        assert!(matches!(
            GridTransform::new(inverted, Granularity::UNIT),
            Err(NormalizeError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn fractional_granularity_snaps_float_error() {
        let grid = grid(0.0, 0.3, 0.1);
        assert_eq!(grid.slots(), 4);
        assert_eq!(grid.index_to_slot(0.3), Some(3));
    }

    #[test]
    fn slot_maps_back_to_axis_index() {
        let grid = grid(1.0, 7.0, 3.0);
        assert_eq!(grid.slot_to_index(0), 1.0);
        assert_eq!(grid.slot_to_index(2), 7.0);
    }
}
