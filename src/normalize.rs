//! Dense, grid-aligned normalization of sparse series.
//!
//! Every series of an [`Input`] is laid onto one shared [`GridTransform`]:
//! the grid starts at the configured origin and covers the largest index of
//! the whole input, so all output rows have the same length. Each point goes
//! to its nearest slot; a slot that receives no point stays `None`, and a slot
//! hit more than once keeps the last point in series order.

use crate::config::{Granularity, NormalizeConfig, Origin};
use crate::datasource::{Input, Series};
use crate::error::{NormalizeError, Result};
use crate::transform::GridTransform;
use crate::view::Range;

/// One dense output row; `None` marks an empty slot.
pub type Row = Vec<Option<f64>>;

/// Normalized values, mirroring the shape of the input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Values {
    /// Output of a single-series input.
    Flat(Row),
    /// Output of a multi-series input, one row per series in input order.
    Multi(Vec<Row>),
}

impl Values {
    /// Access all rows; a flat output has exactly one.
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Flat(row) => std::slice::from_ref(row),
            Self::Multi(rows) => rows,
        }
    }

    /// Consume the values and return all rows.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Flat(row) => vec![row],
            Self::Multi(rows) => rows,
        }
    }
}

/// Result of a normalization run.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    values: Values,
    grid: GridTransform,
}

impl Normalized {
    /// Access the normalized values.
    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Consume the result and return the values.
    pub fn into_values(self) -> Values {
        self.values
    }

    /// Access the grid the values were laid onto.
    pub fn grid(&self) -> &GridTransform {
        &self.grid
    }

    /// Check whether the output has the single-series shape.
    pub fn is_flat(&self) -> bool {
        matches!(self.values, Values::Flat(_))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// Check whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Number of slots in every row.
    pub fn slot_count(&self) -> usize {
        self.grid.slots()
    }

    /// Access all rows.
    pub fn rows(&self) -> &[Row] {
        self.values.rows()
    }

    /// Access a single row.
    pub fn row(&self, index: usize) -> Option<&[Option<f64>]> {
        self.rows().get(index).map(Vec::as_slice)
    }

    /// Range of all defined finite values across every row.
    pub fn value_range(&self) -> Option<Range> {
        self.rows()
            .iter()
            .flatten()
            .flatten()
            .fold(None, |acc, value| Range::include(acc, *value))
    }

    /// Render the result as `{"values": [...]}` with `null` gaps.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Normalized {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Normalized", 1)?;
        state.serialize_field("values", &self.values)?;
        state.end()
    }
}

/// Normalizes inputs according to a [`NormalizeConfig`].
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Access the options.
    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Lay every series of `input` onto a shared dense grid.
    pub fn normalize(&self, input: &Input) -> Result<Normalized> {
        self.validate(input)?;
        let extent = input.extent().ok_or(NormalizeError::EmptyInput)?;
        let origin = self.resolve_origin(input, extent)?;
        let axis = Range {
            min: origin,
            max: extent.max,
        };
        let grid = GridTransform::new(axis, self.config.granularity())?;

        log::debug!(
            "normalizing {} series ({} points) over [{}, {}] into {} slots of width {}",
            input.series().len(),
            input.point_count(),
            extent.min,
            extent.max,
            grid.slots(),
            grid.granularity().get(),
        );

        let values = match input {
            Input::Flat(series) => Values::Flat(fill_row(0, series, &grid)),
            Input::Multi(series) => Values::Multi(
                series
                    .iter()
                    .enumerate()
                    .map(|(index, series)| fill_row(index, series, &grid))
                    .collect(),
            ),
        };
        Ok(Normalized { values, grid })
    }

    fn validate(&self, input: &Input) -> Result<()> {
        for (series_index, series) in input.series().iter().enumerate() {
            let check_order = self.config.strict_order() && !series.is_monotonic();
            let mut previous: Option<f64> = None;
            for (position, point) in series.points().iter().enumerate() {
                if !point.index.is_finite() {
                    return Err(NormalizeError::NonFiniteIndex {
                        series: series_index,
                        position,
                    });
                }
                if check_order && previous.is_some_and(|previous| point.index < previous) {
                    return Err(NormalizeError::NonMonotonicIndex {
                        series: series_index,
                        position,
                    });
                }
                previous = Some(point.index);
            }
        }
        Ok(())
    }

    fn resolve_origin(&self, input: &Input, extent: Range) -> Result<f64> {
        let origin = match self.config.origin() {
            Origin::DataMin => return Ok(extent.min),
            Origin::Zero => 0.0,
            Origin::Fixed(origin) => origin,
        };
        if !origin.is_finite() {
            return Err(NormalizeError::InvalidOrigin(origin));
        }
        if extent.min >= origin {
            return Ok(origin);
        }
        for (series_index, series) in input.series().iter().enumerate() {
            if let Some(position) = series.points().iter().position(|p| p.index < origin) {
                return Err(NormalizeError::IndexBeforeOrigin {
                    series: series_index,
                    position,
                    index: series.points()[position].index,
                    origin,
                });
            }
        }
        Ok(origin)
    }
}

/// Normalize `input` with the default options and the given granularity.
pub fn normalize(input: &Input, granularity: Granularity) -> Result<Normalized> {
    Normalizer::new(NormalizeConfig::new(granularity)).normalize(input)
}

fn fill_row(series_index: usize, series: &Series, grid: &GridTransform) -> Row {
    let mut row = vec![None; grid.slots()];
    for point in series.points() {
        let Some(slot) = grid.index_to_slot(point.index) else {
            log::trace!(
                "series {series_index}: index {} rounds past the last slot, dropped",
                point.index
            );
            continue;
        };
        if let Some(previous) = row[slot] {
            log::trace!(
                "series {series_index}: slot {slot} overwritten ({previous} -> {:?})",
                point.value
            );
        }
        row[slot] = point.value;
    }
    row
}
