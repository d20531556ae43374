use recordboard_domain::{DomainError, TableRow};

/// Surface that shows the record table.
///
/// A render pass is always `clear`, then one `append_row` per record in
/// order, then `flush`. Cells are plain text: surfaces that emit markup must
/// escape them.
pub trait DisplaySurface: Send {
    /// Discards every row currently shown.
    fn clear(&mut self);

    /// Appends a row after the existing ones.
    fn append_row(&mut self, row: TableRow);

    /// Number of rows currently held by the surface.
    fn row_count(&self) -> usize;

    /// Publishes the rows appended since the last `clear`.
    ///
    /// # Errors
    ///
    /// * `DomainError::Surface` - If the surface cannot be written
    fn flush(&mut self) -> Result<(), DomainError> {
        Ok(())
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn append_row(&mut self, row: TableRow) {
        (**self).append_row(row)
    }

    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        (**self).flush()
    }
}
