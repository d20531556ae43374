use arc_swap::ArcSwap;
use recordboard_application::ports::DisplaySurface;
use recordboard_domain::{DomainError, RecordTable, TableRow};
use std::sync::Arc;

/// Publishes each completed table for concurrent readers.
///
/// Rows are staged until `flush`, which swaps the whole table in at once.
/// Readers therefore see either the previous table or the new one, never a
/// table that is still being filled.
pub struct SnapshotSurface {
    staged: RecordTable,
    published: Arc<ArcSwap<RecordTable>>,
}

impl SnapshotSurface {
    pub fn new() -> Self {
        Self {
            staged: RecordTable::new(),
            published: Arc::new(ArcSwap::from_pointee(RecordTable::new())),
        }
    }

    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader {
            published: Arc::clone(&self.published),
        }
    }
}

impl Default for SnapshotSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for SnapshotSurface {
    fn clear(&mut self) {
        self.staged.clear();
    }

    fn append_row(&mut self, row: TableRow) {
        self.staged.push(row);
    }

    fn row_count(&self) -> usize {
        self.staged.len()
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.published.store(Arc::new(self.staged.clone()));
        Ok(())
    }
}

/// Cheap, cloneable handle onto the latest published table.
#[derive(Clone)]
pub struct SnapshotReader {
    published: Arc<ArcSwap<RecordTable>>,
}

impl SnapshotReader {
    pub fn load(&self) -> Arc<RecordTable> {
        self.published.load_full()
    }

    pub fn row_count(&self) -> usize {
        self.published.load().len()
    }
}
