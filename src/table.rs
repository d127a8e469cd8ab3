//! Table model and column-width aggregation
//!
//! A [`Table`] is built once from tokenized rows: ragged rows are reconciled
//! against the column count, cell text is preprocessed (full-width space
//! normalization, max-width truncation), and per-column display widths are
//! computed over every row. After `build` returns the table is immutable and
//! both renderers consume the same frozen widths.

use crate::width::{display_width, normalize_fullwidth_space, truncate_to_width};
use std::fmt;

/// Minimum rendered width of any column.
///
/// Keeps markdown separators (`---`) legal and matches the floor the
/// column-width aggregation applies even for very narrow content.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Fixed-width table with `+---+` borders.
    #[default]
    Ascii,
    /// Pipe-delimited Markdown table.
    Markdown,
}

impl Format {
    /// File extension used by auto-save for this format.
    pub fn default_extension(&self) -> &'static str {
        match self {
            Format::Ascii => "txt",
            Format::Markdown => "md",
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: Format,
    /// Cap on any column's display width; overflowing cells are truncated.
    pub max_column_width: Option<usize>,
    /// Pad markdown cells so columns line up in a monospace viewer.
    pub align_markdown: bool,
    /// Replace U+3000 with two ASCII spaces before measuring and rendering.
    pub normalize_fullwidth_space: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: Format::Ascii,
            max_column_width: None,
            align_markdown: true,
            normalize_fullwidth_space: false,
        }
    }
}

impl RenderOptions {
    /// Reject out-of-range configuration before any processing starts.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_column_width == Some(0) {
            return Err(OptionsError::ZeroMaxWidth);
        }
        Ok(())
    }
}

/// Invalid rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `max_column_width` of zero would truncate every cell to nothing.
    ZeroMaxWidth,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::ZeroMaxWidth => {
                write!(f, "max column width must be at least 1")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

/// A single table cell.
///
/// Holds only the text; display width is always recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width of the cell content.
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// An ordered sequence of cells.
pub type Row = Vec<Cell>;

/// An immutable table with frozen per-column widths.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Row>,
    has_header: bool,
    column_widths: Vec<usize>,
}

impl Table {
    /// Build a table from tokenized rows.
    ///
    /// Column count is the header row's length when `has_header` is set,
    /// otherwise the longest observed row. Short rows are padded with empty
    /// cells; a longer row folds its extra fields back into the last column,
    /// rejoined with `delimiter`, so no data is dropped. Ragged input is
    /// therefore never an error.
    ///
    /// Cell preprocessing happens here, before widths are measured: U+3000
    /// normalization first (when enabled), then truncation to
    /// `max_column_width` (when capped).
    pub fn build(
        raw_rows: Vec<Vec<String>>,
        has_header: bool,
        delimiter: char,
        options: &RenderOptions,
    ) -> Result<Table, OptionsError> {
        options.validate()?;

        let column_count = if has_header {
            raw_rows.first().map(Vec::len).unwrap_or(0)
        } else {
            raw_rows.iter().map(Vec::len).max().unwrap_or(0)
        };

        let rows: Vec<Row> = raw_rows
            .into_iter()
            .map(|raw| {
                let reconciled = reconcile_row(raw, column_count, delimiter);
                reconciled
                    .into_iter()
                    .map(|text| Cell::new(preprocess(&text, options)))
                    .collect()
            })
            .collect();

        let mut column_widths = vec![0usize; column_count];
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                column_widths[i] = column_widths[i].max(cell.width());
            }
        }
        for width in &mut column_widths {
            *width = (*width).max(MIN_COLUMN_WIDTH);
            if let Some(cap) = options.max_column_width {
                *width = (*width).min(cap);
            }
        }

        Ok(Table {
            rows,
            has_header,
            column_widths,
        })
    }

    /// All rows, header first when present.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the first row is a header.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Frozen per-column display widths.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of data rows (rows minus the header, if any).
    pub fn data_row_count(&self) -> usize {
        if self.has_header {
            self.rows.len().saturating_sub(1)
        } else {
            self.rows.len()
        }
    }
}

/// Pad a short row with empty cells, fold a long row into the last column.
fn reconcile_row(mut raw: Vec<String>, column_count: usize, delimiter: char) -> Vec<String> {
    if raw.len() > column_count && column_count > 0 {
        let extras = raw.split_off(column_count);
        let last = raw.last_mut().unwrap();
        for extra in extras {
            last.push(delimiter);
            last.push_str(&extra);
        }
    }
    while raw.len() < column_count {
        raw.push(String::new());
    }
    raw
}

fn preprocess(text: &str, options: &RenderOptions) -> String {
    let normalized = if options.normalize_fullwidth_space {
        normalize_fullwidth_space(text)
    } else {
        std::borrow::Cow::Borrowed(text)
    };

    match options.max_column_width {
        Some(cap) => truncate_to_width(&normalized, cap).into_owned(),
        None => normalized.into_owned(),
    }
}
