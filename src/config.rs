//! Normalization options.

use crate::error::{NormalizeError, Result};

/// Width of one output slot along the index axis.
///
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Granularity(f64);

impl Granularity {
    /// One slot per unit of index.
    pub const UNIT: Self = Self(1.0);

    /// Validate a granularity value.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(NormalizeError::InvalidGranularity(value))
        }
    }

    /// Access the raw width.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<f64> for Granularity {
    type Error = NormalizeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Granularity> for f64 {
    fn from(granularity: Granularity) -> Self {
        granularity.0
    }
}

/// Axis index that output slot 0 stands for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Origin {
    /// Smallest index found across the whole input.
    #[default]
    DataMin,
    /// Index zero; every index must be non-negative.
    Zero,
    /// Caller-chosen index; every index must be at or after it.
    Fixed(f64),
}

/// Options controlling how series are laid onto the output grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NormalizeConfig {
    granularity: Granularity,
    origin: Origin,
    strict_order: bool,
}

impl NormalizeConfig {
    /// Create a configuration with the given granularity and default options.
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            ..Self::default()
        }
    }

    /// Set the granularity.
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Reject series whose indices decrease.
    pub fn with_strict_order(mut self, strict: bool) -> Self {
        self.strict_order = strict;
        self
    }

    /// Access the granularity.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Access the origin.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Check whether decreasing indices are rejected.
    pub fn strict_order(&self) -> bool {
        self.strict_order
    }
}
