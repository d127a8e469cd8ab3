//! Markdown table renderer
//!
//! Two shapes, both valid Markdown:
//!
//! Aligned (`align = true`) pads every cell to the table's frozen column
//! widths so the source reads well in a monospace viewer:
//!
//! ```text
//! | Name     | Age | City |
//! | -------- | --- | ---- |
//! | 田中太郎 | 25  | 東京 |
//! ```
//!
//! Minimal (`align = false`) emits no padding at all and a fixed `---`
//! separator per column:
//!
//! ```text
//! |Name|Age|City|
//! |---|---|---|
//! |田中太郎|25|東京|
//! ```
//!
//! Markdown requires a header row; a headerless table gets synthesized
//! `Column N` labels.

use crate::table::{Cell, Table};
use crate::width::pad_to_width;
use std::borrow::Cow;

/// Renders a [`Table`] as a pipe-delimited Markdown table.
pub struct MarkdownRenderer {
    align: bool,
}

impl MarkdownRenderer {
    /// `align` pads cells to the table's column widths; off means minimal
    /// Markdown with no padding.
    pub fn new(align: bool) -> Self {
        Self { align }
    }

    /// Render the table; no trailing newline.
    pub fn render(&self, table: &Table) -> String {
        if table.row_count() == 0 {
            return String::new();
        }

        let mut lines = Vec::with_capacity(table.row_count() + 2);

        if !table.has_header() {
            lines.push(self.placeholder_header(table));
            lines.push(self.separator_line(table.column_widths()));
        }

        for (index, row) in table.rows().iter().enumerate() {
            lines.push(self.data_line(row, table.column_widths()));
            if table.has_header() && index == 0 {
                lines.push(self.separator_line(table.column_widths()));
            }
        }

        lines.join("\n")
    }

    fn data_line(&self, row: &[Cell], widths: &[usize]) -> String {
        let cells = row
            .iter()
            .map(|cell| escape_pipes(cell.text()))
            .collect::<Vec<_>>();
        self.join_cells(cells.iter().map(Cow::as_ref), widths)
    }

    /// Synthesized `Column N` header for tables without one.
    ///
    /// Labels longer than a column's frozen width simply overflow it; the
    /// output stays valid Markdown, only the monospace alignment of narrow
    /// columns gives a little.
    fn placeholder_header(&self, table: &Table) -> String {
        let labels: Vec<String> = (1..=table.column_count())
            .map(|n| format!("Column {n}"))
            .collect();
        self.join_cells(labels.iter().map(String::as_str), table.column_widths())
    }

    fn separator_line(&self, widths: &[usize]) -> String {
        if self.align {
            let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            self.join_cells(dashes.iter().map(String::as_str), widths)
        } else {
            let mut line = String::from("|");
            for _ in widths {
                line.push_str("---|");
            }
            line
        }
    }

    fn join_cells<'a>(
        &self,
        cells: impl Iterator<Item = &'a str>,
        widths: &[usize],
    ) -> String {
        let mut line = String::from("|");
        for (cell, &width) in cells.zip(widths) {
            if self.align {
                line.push(' ');
                line.push_str(&pad_to_width(cell, width));
                line.push_str(" |");
            } else {
                line.push_str(cell);
                line.push('|');
            }
        }
        line
    }
}

/// Escape literal pipes so they do not break the table structure.
///
/// Escaping happens at render time; a `\|` is one column wider than the `|`
/// the frozen widths measured, so a cell containing pipes may overflow its
/// column slightly.
fn escape_pipes(text: &str) -> Cow<'_, str> {
    if text.contains('|') {
        Cow::Owned(text.replace('|', "\\|"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RenderOptions, Table};

    fn build(data: &[&[&str]], has_header: bool) -> Table {
        let raw = data
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        Table::build(raw, has_header, ',', &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_minimal_has_no_padding() {
        let table = build(&[&["Name", "Age", "City"], &["田中太郎", "25", "東京"]], true);
        let expected = "\
|Name|Age|City|
|---|---|---|
|田中太郎|25|東京|";
        assert_eq!(MarkdownRenderer::new(false).render(&table), expected);
    }

    #[test]
    fn test_aligned_pads_to_column_widths() {
        let table = build(&[&["Name", "Age", "City"], &["田中太郎", "25", "東京"]], true);
        let expected = "\
| Name     | Age | City |
| -------- | --- | ---- |
| 田中太郎 | 25  | 東京 |";
        assert_eq!(MarkdownRenderer::new(true).render(&table), expected);
    }

    #[test]
    fn test_pipes_escaped() {
        let table = build(&[&["a"], &["x|y"]], true);
        let rendered = MarkdownRenderer::new(false).render(&table);
        assert!(rendered.contains("|x\\|y|"));
    }

    #[test]
    fn test_headerless_gets_placeholder() {
        let table = build(&[&["1", "2"], &["3", "4"]], false);
        let expected = "\
|Column 1|Column 2|
|---|---|
|1|2|
|3|4|";
        assert_eq!(MarkdownRenderer::new(false).render(&table), expected);
    }

    #[test]
    fn test_same_widths_as_ascii() {
        use crate::ascii::AsciiRenderer;
        use crate::width::display_width;

        let table = build(&[&["Name", "City"], &["田中太郎", "東京"]], true);
        let ascii = AsciiRenderer::new().render(&table);
        let markdown = MarkdownRenderer::new(true).render(&table);

        // Same frozen widths drive both renderers, so the cell lines of the
        // two outputs occupy identical display widths.
        let ascii_line = ascii.lines().nth(1).unwrap();
        let md_line = markdown.lines().next().unwrap();
        assert_eq!(display_width(ascii_line), display_width(md_line));
    }
}
