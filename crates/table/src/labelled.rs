//! A header-labelled grid of loosely typed cells.

use taborga_idf::{DepthTable, duration_label};

use crate::labels::{parse_decimal, return_period_label};

/// Header of the duration column in rendered depth tables.
pub const DURATION_HEADER: &str = "Duration";

static EMPTY: Cell = Cell::Empty;

/// One cell of a [`LabelledTable`].
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// A numeric value.
    Number(f64),
    /// Raw text, as read from a file.
    Text(String),
    /// A missing value.
    Empty,
}

impl Cell {
    /// Numeric value of the cell, if any.
    ///
    /// Text is parsed with either decimal separator. Blank, unparseable and
    /// non-finite cells yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => v.is_finite().then_some(*v),
            Self::Text(s) => parse_decimal(s),
            Self::Empty => None,
        }
    }

    /// Text content of the cell, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

/// A table with named columns and positional rows.
///
/// Rows shorter than the header are treated as padded with
/// [`Cell::Empty`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelledTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl LabelledTable {
    /// Creates a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Returns the column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the cell at `(row, col)`, or [`Cell::Empty`] past the end of
    /// a short row.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Index of the first column whose header names a duration.
    pub fn duration_column(&self) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.to_lowercase().contains("dura"))
    }
}

impl From<&DepthTable> for LabelledTable {
    /// Renders a depth table: a `Duration` column of row labels followed by
    /// one `TR <n>` column per return period.
    fn from(table: &DepthTable) -> Self {
        let headers = std::iter::once(DURATION_HEADER.to_string())
            .chain(table.return_periods().iter().map(|&tr| return_period_label(tr)))
            .collect();
        let rows = table
            .durations()
            .iter()
            .zip(table.rows())
            .map(|(&hours, cells)| {
                std::iter::once(Cell::Text(duration_label(hours)))
                    .chain(cells.iter().map(|c| Cell::Number(c.depth_mm)))
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }
}
