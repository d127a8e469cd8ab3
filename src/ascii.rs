//! Fixed-width ASCII box renderer
//!
//! Produces the classic `+---+` bordered layout:
//!
//! ```text
//! +----------+-----+------+
//! | Name     | Age | City |
//! +----------+-----+------+
//! | 田中太郎 | 25  | 東京 |
//! +----------+-----+------+
//! ```
//!
//! Cells are left-aligned only; padding is `column_width - display_width`,
//! so full-width text lines up with ASCII text in the same column.

use crate::table::Table;
use crate::width::pad_to_width;

/// Renders a [`Table`] as a bordered fixed-width ASCII table.
pub struct AsciiRenderer {
    // Stateless; the frozen table carries everything needed.
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Render the table; no trailing newline.
    pub fn render(&self, table: &Table) -> String {
        if table.row_count() == 0 {
            return String::new();
        }

        let border = border_line(table.column_widths());
        let mut lines = Vec::with_capacity(table.row_count() + 3);
        lines.push(border.clone());

        for (index, row) in table.rows().iter().enumerate() {
            let mut line = String::from("|");
            for (cell, &width) in row.iter().zip(table.column_widths()) {
                line.push(' ');
                line.push_str(&pad_to_width(cell.text(), width));
                line.push_str(" |");
            }
            lines.push(line);

            if table.has_header() && index == 0 {
                lines.push(border.clone());
            }
        }

        lines.push(border);
        lines.join("\n")
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Border of `+` joints and `-` runs sized to width + 2 padding columns.
fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}
