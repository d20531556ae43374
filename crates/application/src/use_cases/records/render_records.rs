use recordboard_domain::{DnsRecord, DomainError, TableRow};
use tracing::{debug, instrument};

use crate::ports::DisplaySurface;

/// Replaces the displayed table with one row per record, in input order.
pub struct RenderRecordsUseCase<S: DisplaySurface> {
    surface: S,
}

impl<S: DisplaySurface> RenderRecordsUseCase<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Renders `records`, discarding whatever was shown before.
    ///
    /// Returns the number of rows now displayed.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn execute(&mut self, records: &[DnsRecord]) -> Result<usize, DomainError> {
        self.surface.clear();

        for record in records {
            self.surface.append_row(TableRow::from(record));
        }

        self.surface.flush()?;

        debug!(rows = records.len(), "Record table rendered");

        Ok(records.len())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
