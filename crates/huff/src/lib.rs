//! # taborga-huff
//!
//! Temporal disaggregation of a storm depth with the Huff curve family.
//!
//! A Huff curve gives the cumulative percentage of a storm's depth that has
//! fallen after a given percentage of its duration. Storms are classified
//! into four quartile classes by total duration, each with its own
//! regression polynomial; classes III and IV are split in two at a fixed
//! elapsed-time threshold.
//!
//! ## Quick Start
//!
//! ```
//! use taborga_huff::{HyetogramSeries, cumulative_percent};
//!
//! assert_eq!(cumulative_percent(0.0, 2.0), 0.0);
//! assert_eq!(cumulative_percent(100.0, 2.0), 100.0);
//!
//! let series = HyetogramSeries::build(10, 100.0, 2.0).unwrap();
//! assert_eq!(series.intensities().len(), 120);
//! assert!((series.total_depth() - 100.0).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `curve` | Quartile classes, polynomial branches, cumulative-percentage evaluation |
//! | `hyetogram` | Minute-by-minute intensity series |
//! | `error` | Error types |

mod curve;
mod error;
mod hyetogram;

pub use curve::{
    CLASS_III_BREAK_PERCENT, CLASS_IV_BREAK_PERCENT, HuffCurve, Quartile, cumulative_percent,
};
pub use error::HuffError;
pub use hyetogram::{HyetogramSeries, MAX_DURATION_MINUTES, build_hyetogram, duration_minutes};
