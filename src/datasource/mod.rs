//! Series storage and normalization input.
//!
//! A [`Series`] keeps its points in caller order and tracks its index extent
//! and ordering incrementally as points are appended. [`Input`] fixes the
//! shape (one series or several) up front, so the normalizer never has to
//! probe nesting depth.

#[cfg(feature = "serde")]
mod json;

use crate::geom::Point;
use crate::view::Range;

/// Ordered sequence of points sharing one index axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<Point>,
    monotonic: bool,
    extent: Option<Range>,
}

impl Series {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            monotonic: true,
            extent: None,
        }
    }

    /// Build a series from `(index, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::from_points(pairs.into_iter().map(Point::from))
    }

    /// Build a series from points.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut series = Self::new();
        series.extend(points);
        series
    }

    /// Append a point and return its position.
    ///
    /// Points whose index is smaller than the previous one are accepted but
    /// clear the monotonic flag.
    pub fn push(&mut self, point: Point) -> usize {
        let position = self.points.len();
        if self
            .points
            .last()
            .is_some_and(|last| point.index < last.index)
        {
            self.monotonic = false;
        }
        self.extent = Range::include(self.extent, point.index);
        self.points.push(point);
        position
    }

    /// Append multiple points and return how many were added.
    pub fn extend<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter();
        let (reserve, _) = points.size_hint();
        self.points.reserve(reserve);

        let start_len = self.points.len();
        for point in points {
            self.push(point);
        }
        self.points.len() - start_len
    }

    /// Access all points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether indices never decrease.
    ///
    /// An empty or single-point series is monotonic. Non-finite indices do
    /// not count as a decrease.
    pub fn is_monotonic(&self) -> bool {
        self.monotonic
    }

    /// Index extent over all finite indices.
    pub fn extent(&self) -> Option<Range> {
        self.extent
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<(f64, f64)>> for Series {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

/// Normalization input: one series or an ordered list of series.
///
/// The variant decides the shape of the normalized output.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A single series; normalizes to a single row.
    Flat(Series),
    /// Several series sharing one index axis; normalizes to one row each.
    Multi(Vec<Series>),
}

impl Input {
    /// Wrap a single series.
    pub fn flat(series: impl Into<Series>) -> Self {
        Self::Flat(series.into())
    }

    /// Wrap several series.
    pub fn multi<I, S>(series: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Series>,
    {
        Self::Multi(series.into_iter().map(Into::into).collect())
    }

    /// Access the series in input order.
    pub fn series(&self) -> &[Series] {
        match self {
            Self::Flat(series) => std::slice::from_ref(series),
            Self::Multi(series) => series,
        }
    }

    /// Check whether this is the single-series shape.
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat(_))
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series().iter().map(Series::len).sum()
    }

    /// Index extent across every series.
    pub fn extent(&self) -> Option<Range> {
        self.series()
            .iter()
            .filter_map(Series::extent)
            .fold(None, Range::merge)
    }
}

impl From<Series> for Input {
    fn from(series: Series) -> Self {
        Self::Flat(series)
    }
}

impl From<Vec<Series>> for Input {
    fn from(series: Vec<Series>) -> Self {
        Self::Multi(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_tracks_extent_and_order() {
        let mut series = Series::new();
        assert_eq!(series.push(Point::new(1.0, 2.0)), 0);
        assert_eq!(series.push(Point::new(4.0, 5.0)), 1);
        assert!(series.is_monotonic());
        assert_eq!(series.extent(), Some(Range::new(1.0, 4.0)));

        series.push(Point::new(3.0, 3.0));
        assert!(!series.is_monotonic());
        assert_eq!(series.len(), 3);
        assert_eq!(series.points()[2], Point::new(3.0, 3.0));
    }

    #[test]
    fn extent_ignores_non_finite_indices() {
        let series = Series::from_points([
            Point::new(2.0, 1.0),
            Point::new(f64::NAN, 1.0),
            Point::new(6.0, 1.0),
        ]);
        assert_eq!(series.extent(), Some(Range::new(2.0, 6.0)));
    }

    #[test]
    fn extend_reports_added_points() {
        let mut series = Series::from_pairs([(0.0, 1.0)]);
        let added = series.extend([Point::new(1.0, 2.0), Point::undefined(2.0)]);
        assert_eq!(added, 2);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn input_extent_spans_all_series() {
        let input = Input::multi(vec![
            vec![(1.0, 2.0), (3.0, 3.0)],
            vec![],
            vec![(0.5, 4.0), (8.0, 9.0)],
        ]);
        assert_eq!(input.series().len(), 3);
        assert_eq!(input.point_count(), 4);
        assert_eq!(input.extent(), Some(Range::new(0.5, 8.0)));
    }

    #[test]
    fn flat_input_exposes_one_series() {
        let input = Input::flat(vec![(1.0, 2.0)]);
        assert!(input.is_flat());
        assert_eq!(input.series().len(), 1);
    }
}
