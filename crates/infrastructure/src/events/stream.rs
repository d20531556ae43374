use async_trait::async_trait;
use futures::{Stream, StreamExt};
use recordboard_application::ports::EventSource;
use recordboard_domain::{DomainError, InboundEvent};

/// Adapts any stream of decoded events into an `EventSource`.
pub struct StreamEventSource<S> {
    stream: S,
}

impl<S> StreamEventSource<S>
where
    S: Stream<Item = InboundEvent> + Unpin + Send,
{
    pub fn new(stream: S) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl<S> EventSource for StreamEventSource<S>
where
    S: Stream<Item = InboundEvent> + Unpin + Send,
{
    async fn next_event(&mut self) -> Result<Option<InboundEvent>, DomainError> {
        Ok(self.stream.next().await)
    }
}
