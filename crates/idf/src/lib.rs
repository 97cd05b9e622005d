//! # taborga-idf
//!
//! Depth-duration interpolation for the isozone method.
//!
//! A zone's coefficient record turns each return period's 24-hour depth into
//! three anchors (24 h, 1 h, 6 min). Intermediate durations are read off two
//! log-linear segments fitted through those anchors.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ZoneCoefficients"] -->|"CoefficientSet::lookup()"| B["BaseDepths"]
//!     C["ReturnPeriodDepth"] --> B
//!     B -->|"interpolate_depth()"| D["DurationDepthCell"]
//!     D -->|"build_table()"| E["DepthTable"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use taborga_idf::{
//!     CoefficientSet, ReturnPeriodDepth, ZoneCoefficients, compute_depth_table,
//!     standard_durations,
//! };
//!
//! let coefficients = CoefficientSet::new(vec![ZoneCoefficients::new("A", 65.0, 30.0).unwrap()]);
//! let depths = vec![ReturnPeriodDepth::new(100, 150.0).unwrap()];
//!
//! let table = compute_depth_table("a", &coefficients, &depths, &standard_durations()).unwrap();
//! assert_eq!(table.durations().len(), 16);
//! assert_eq!(table.return_periods(), &[100]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `interpolate` | Two-point `y = a·ln(x) + b` fit and the two-segment depth model |
//! | `base` | 24 h / 1 h / 6 min anchor depths |
//! | `coefficients` | Zone coefficient records and lookup |
//! | `duration` | Standard durations and their labels |
//! | `table` | Duration × return-period depth table |
//! | `error` | Error types |

mod base;
mod coefficients;
mod duration;
mod error;
mod interpolate;
mod table;

pub use base::{BaseDepths, DEPTH_24H_CORRECTION, ReturnPeriodBase};
pub use coefficients::{CoefficientSet, ReturnPeriodDepth, ZoneCoefficients, normalize_zone};
pub use duration::{STANDARD_DURATIONS_MIN, duration_label, standard_durations};
pub use error::IdfError;
pub use interpolate::{LogFit, interpolate_depth};
pub use table::{DepthTable, DurationDepthCell, build_table, compute_depth_table};
