//! # taborga-table
//!
//! Reshaping between the depth table (duration rows × return-period
//! columns) and the minute-indexed hyetogram table (one column per
//! return period and duration).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DepthTable"] -->|"LabelledTable::from()"| B["LabelledTable"]
//!     B -->|"unpack()"| C["ScenarioDepth records"]
//!     C -->|"hyetograms()"| D["HyetogramSeries"]
//!     D -->|"repack()"| E["OutputTable"]
//! ```
//!
//! ## Label formats
//!
//! | Label | Format | Example |
//! |-------|--------|---------|
//! | duration | `"<n> min"` / `"<n> h"` | `"10 min"`, `"24 h"` |
//! | return period | `"TR <n>"` | `"TR 100"` |
//! | scenario | `"<tr>,<n>min"` / `"<tr>,<n>h"` | `"100,10min"`, `"100,1h"` |

mod error;
mod labelled;
mod labels;
mod pipeline;
mod repack;
mod unpack;

pub use error::TableError;
pub use labelled::{Cell, DURATION_HEADER, LabelledTable};
pub use labels::{
    ScenarioLabel, parse_decimal, parse_duration_label, parse_return_period_label,
    return_period_label,
};
pub use pipeline::{distribute, hyetograms};
pub use repack::{MINUTE_HEADER, OutputColumn, OutputTable, repack};
pub use unpack::{ScenarioDepth, unpack};
