use crate::DnsRecord;

/// Column headers, in cell order.
pub const COLUMN_HEADERS: [&str; 3] = ["Name", "Rdataset", "TTL"];

/// One displayed row: the name, rdataset and ttl cells of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; 3],
}

impl TableRow {
    pub fn new(name: impl Into<String>, rdataset: impl Into<String>, ttl: impl Into<String>) -> Self {
        Self {
            cells: [name.into(), rdataset.into(), ttl.into()],
        }
    }

    pub fn name(&self) -> &str {
        &self.cells[0]
    }

    pub fn rdataset(&self) -> &str {
        &self.cells[1]
    }

    pub fn ttl(&self) -> &str {
        &self.cells[2]
    }
}

impl From<&DnsRecord> for TableRow {
    fn from(record: &DnsRecord) -> Self {
        Self::new(
            record.name.clone(),
            record.rdataset.clone(),
            record.ttl.clone(),
        )
    }
}

/// Ordered rows currently shown on a display surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    rows: Vec<TableRow>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects records into rows, preserving their order.
    pub fn from_records(records: &[DnsRecord]) -> Self {
        Self {
            rows: records.iter().map(TableRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn push(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}
