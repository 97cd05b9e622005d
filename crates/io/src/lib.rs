//! # taborga-io
//!
//! File boundaries for the taborga engine: CSV coefficient and depth files
//! in, CSV depth and hyetogram tables out, and GeoJSON zone polygons for
//! coordinate lookup.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["coefficients.csv"] -->|"read_coefficients()"| B["CoefficientSet"]
//!     C["depths.csv"] -->|"read_depths()"| D["ReturnPeriodDepth"]
//!     E["depth table csv"] -->|"read_depth_table()"| F["LabelledTable"]
//!     F -->|"write_depth_table()"| E
//!     G["OutputTable"] -->|"write_hyetogram_table()"| H["hyetogram csv"]
//!     I["zones.geojson"] -->|"GeoJsonZones::from_path()"| J["ZoneResolver"]
//! ```
//!
//! Readers sniff the delimiter (`;` if the header line has one, else `,`),
//! match headers case-insensitively and accept either decimal separator.
//! Writers default to `;` with a `.` decimal point.

mod error;
mod reader;
mod records;
mod writer;
mod zones;

pub use error::IoError;
pub use reader::{detect_delimiter, read_depth_table};
pub use records::{read_coefficients, read_depths};
pub use writer::{WriterConfig, write_depth_table, write_hyetogram_table};
pub use zones::{GeoJsonZones, ZoneResolver};
