use recordboard_application::ports::DisplaySurface;
use recordboard_domain::{DomainError, TableRow, COLUMN_HEADERS};
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::PathBuf;

use super::replace_file;

/// Aligned plain-text table.
///
/// Each flush writes the whole table followed by a blank line, so a terminal
/// shows successive snapshots one after another. With an output path the
/// file is replaced instead.
pub struct TextTableSurface<W: Write + Send> {
    rows: Vec<TableRow>,
    writer: W,
    output: Option<PathBuf>,
}

impl TextTableSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TextTableSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            rows: Vec::new(),
            writer,
            output: None,
        }
    }

    /// Rewrites `path` on every flush instead of writing to the writer.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn render_text(&self) -> String {
        let cells: Vec<[Cow<'_, str>; 3]> = self
            .rows
            .iter()
            .map(|row| row.cells.each_ref().map(|cell| display_cell(cell)))
            .collect();

        let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &COLUMN_HEADERS, &widths);
        let rule = widths.map(|w| "-".repeat(w));
        push_line(&mut out, &rule, &widths);
        for row in &cells {
            push_line(&mut out, row, &widths);
        }
        out
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Control characters would break the row or the column alignment, so each
/// one is shown as a single space.
fn display_cell(cell: &str) -> Cow<'_, str> {
    if cell.chars().any(char::is_control) {
        Cow::Owned(
            cell.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(cell)
    }
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let cell: &str = cell.as_ref();
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = width.saturating_sub(cell.chars().count()) + 2;
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

impl<W: Write + Send> DisplaySurface for TextTableSurface<W> {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        let text = self.render_text();

        if let Some(path) = &self.output {
            return replace_file(path, text.as_bytes());
        }

        writeln!(self.writer, "{}", text)
            .and_then(|_| self.writer.flush())
            .map_err(|e| DomainError::Surface(e.to_string()))
    }
}
