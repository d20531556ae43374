use askama::Template;
use recordboard_application::ports::DisplaySurface;
use recordboard_domain::{DomainError, TableRow};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use super::replace_file;

/// Rows of the records table body. Cells are HTML-escaped by the template.
#[derive(Template)]
#[template(
    source = r#"<tbody id="{{ table_id }}">
{%- for row in rows %}
<tr>{% for cell in row.cells %}<td>{{ cell }}</td>{% endfor %}</tr>
{%- endfor %}
</tbody>"#,
    ext = "html"
)]
struct TableBodyView<'a> {
    table_id: &'a str,
    rows: &'a [TableRow],
}

enum Sink {
    None,
    File(PathBuf),
    Stdout,
}

/// Renders the table as an HTML `<tbody>` fragment.
pub struct HtmlTableSurface {
    table_id: String,
    rows: Vec<TableRow>,
    sink: Sink,
}

impl HtmlTableSurface {
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            rows: Vec::new(),
            sink: Sink::None,
        }
    }

    /// Rewrites `path` with the fragment on every flush.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = Sink::File(path.into());
        self
    }

    /// Prints the fragment to stdout on every flush.
    pub fn with_stdout(mut self) -> Self {
        self.sink = Sink::Stdout;
        self
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn render_fragment(&self) -> Result<String, DomainError> {
        TableBodyView {
            table_id: &self.table_id,
            rows: &self.rows,
        }
        .render()
        .map_err(|e| DomainError::Surface(format!("template rendering failed: {}", e)))
    }
}

impl DisplaySurface for HtmlTableSurface {
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
        match &self.sink {
            Sink::None => Ok(()),
            Sink::File(path) => {
                let fragment = self.render_fragment()?;
                replace_file(path, fragment.as_bytes())?;
                debug!(path = %path.display(), rows = self.rows.len(), "HTML table written");
                Ok(())
            }
            Sink::Stdout => {
                let fragment = self.render_fragment()?;
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", fragment)
                    .and_then(|_| stdout.flush())
                    .map_err(|e| DomainError::Surface(e.to_string()))
            }
        }
    }
}
