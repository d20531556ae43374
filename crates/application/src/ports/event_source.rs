use async_trait::async_trait;
use recordboard_domain::{DomainError, InboundEvent};

/// Source of decoded real-time events.
///
/// Implementations only decode frames; connecting to the producer is the
/// caller's concern.
#[async_trait]
pub trait EventSource: Send {
    /// Waits for the next event.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(event))` - A decoded event
    /// * `Ok(None)` - The source is exhausted and will not yield again
    /// * `Err(DomainError)` - A frame could not be decoded
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidFrame` - The current frame was skipped; the source can be polled again
    /// * `DomainError::IoError` - The underlying reader failed; the source is unusable
    async fn next_event(&mut self) -> Result<Option<InboundEvent>, DomainError>;
}

#[async_trait]
impl<E: EventSource + ?Sized> EventSource for Box<E> {
    async fn next_event(&mut self) -> Result<Option<InboundEvent>, DomainError> {
        (**self).next_event().await
    }
}
