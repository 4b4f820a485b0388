//! JSON decoding of chart input.
//!
//! Accepts the nested array layout charts are fed with: `[[index, value], ...]`
//! for a single series, `[[[index, value], ...], ...]` for several. The shape
//! is decided once here, from nesting depth.

use std::str::FromStr;

use serde_json::Value;

use crate::datasource::{Input, Series};
use crate::error::{NormalizeError, Result};
use crate::geom::Point;

impl Input {
    /// Parse input from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }

    /// Decode input from a parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            NormalizeError::InvalidShape("expected an array of points or of series".into())
        })?;

        if is_multi(items)? {
            let series = items
                .iter()
                .enumerate()
                .map(|(index, item)| decode_series(index, item))
                .collect::<Result<Vec<_>>>()?;
            Ok(Self::Multi(series))
        } else {
            Ok(Self::Flat(decode_series(0, value)?))
        }
    }
}

impl FromStr for Input {
    type Err = NormalizeError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_json_str(text)
    }
}

/// Depth 3 (series of pairs) is multi; depth 2 (pairs) is flat.
fn is_multi(items: &[Value]) -> Result<bool> {
    for item in items {
        let inner = item.as_array().ok_or_else(|| {
            NormalizeError::InvalidShape(format!("expected an array, found {item}"))
        })?;
        if let Some(first) = inner.first() {
            return Ok(first.is_array());
        }
    }
    // Only empty arrays: treat each one as an empty series.
    Ok(!items.is_empty())
}

fn decode_series(series: usize, value: &Value) -> Result<Series> {
    let items = value.as_array().ok_or_else(|| {
        NormalizeError::InvalidShape(format!("series {series} is not an array"))
    })?;
    let mut out = Series::new();
    out.extend(
        items
            .iter()
            .enumerate()
            .map(|(position, item)| decode_point(series, position, item))
            .collect::<Result<Vec<_>>>()?,
    );
    Ok(out)
}

fn decode_point(series: usize, position: usize, value: &Value) -> Result<Point> {
    let malformed = |reason: &str| NormalizeError::MalformedPoint {
        series,
        position,
        reason: reason.to_owned(),
    };

    let pair = match value.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => return Err(malformed("expected an [index, value] pair")),
    };
    let index = pair[0]
        .as_f64()
        .ok_or_else(|| malformed("index is not a number"))?;
    let value = match &pair[1] {
        Value::Null => None,
        other => Some(
            other
                .as_f64()
                .ok_or_else(|| malformed("value is not a number or null"))?,
        ),
    };
    Ok(Point { index, value })
}
