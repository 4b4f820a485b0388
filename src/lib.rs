//! chart_normalize turns sparse `[index, value]` series into dense rows laid
//! onto a regular grid, ready for chart rendering.
//!
//! ```
//! use chart_normalize::{Granularity, Input, normalize};
//!
//! let input = Input::multi(vec![
//!     vec![(1.0, 1.0), (4.0, 3.0)],
//!     vec![(4.0, 4.0), (7.0, 7.0)],
//! ]);
//! let normalized = normalize(&input, Granularity::new(3.0)?)?;
//! assert_eq!(
//!     normalized.rows(),
//!     &[vec![Some(1.0), Some(3.0), None], vec![None, Some(4.0), Some(7.0)]]
//! );
//! # Ok::<(), chart_normalize::NormalizeError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod datasource;
pub mod error;
pub mod geom;
pub mod normalize;
pub mod transform;
pub mod view;

pub use config::{Granularity, NormalizeConfig, Origin};
pub use datasource::{Input, Series};
pub use error::{NormalizeError, Result};
pub use geom::Point;
pub use normalize::{Normalized, Normalizer, Row, Values, normalize};
pub use transform::{GridTransform, MAX_SLOTS};
pub use view::Range;
