//! Sample points on the shared index axis.

/// A single sample of a series.
///
/// `value` is `None` for a sample that exists on the axis but carries no
/// value; such a point still claims its slot in the output grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Position on the shared index axis.
    pub index: f64,
    /// Sample value.
    pub value: Option<f64>,
}

impl Point {
    /// Create a point with a defined value.
    pub fn new(index: f64, value: f64) -> Self {
        Self {
            index,
            value: Some(value),
        }
    }

    /// Create a point with no value.
    pub fn undefined(index: f64) -> Self {
        Self { index, value: None }
    }
}

impl From<(f64, f64)> for Point {
    fn from((index, value): (f64, f64)) -> Self {
        Self::new(index, value)
    }
}

impl From<(f64, Option<f64>)> for Point {
    fn from((index, value): (f64, Option<f64>)) -> Self {
        Self { index, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_conversions_keep_both_fields() {
        assert_eq!(Point::from((4.0, 3.0)), Point::new(4.0, 3.0));
        assert_eq!(Point::from((2.0, None)), Point::undefined(2.0));
    }
}
