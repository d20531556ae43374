use async_trait::async_trait;
use recordboard_application::ports::EventSource;
use recordboard_domain::{DnsRecord, DomainError, InboundEvent};
use tokio::sync::mpsc;

/// Non-blocking emitter for records events.
///
/// Uses an unbounded channel so producers never await. Events are
/// fire-and-forget: once the paired `ChannelEventSource` is dropped, further
/// emits are silently discarded.
#[derive(Clone)]
pub struct RecordsEventEmitter {
    /// - Some: emitter is enabled, events are sent
    /// - None: emitter is disabled, emit() is a no-op
    sender: Option<mpsc::UnboundedSender<InboundEvent>>,
}

impl RecordsEventEmitter {
    /// Creates a disabled emitter.
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    /// Creates an enabled emitter and the source that receives its events.
    pub fn new_enabled() -> (Self, ChannelEventSource) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self { sender: Some(tx) };
        (emitter, ChannelEventSource::new(rx))
    }

    /// Emits an arbitrary named event (never blocks).
    pub fn emit(&self, event: InboundEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }

    /// Emits a `dns_records` event carrying `records`.
    pub fn emit_records(&self, records: &[DnsRecord]) {
        self.emit(InboundEvent::dns_records(records));
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl Default for RecordsEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for RecordsEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordsEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Receiving end of a `RecordsEventEmitter`.
///
/// Exhausted once every emitter clone has been dropped and the queue drained.
pub struct ChannelEventSource {
    receiver: mpsc::UnboundedReceiver<InboundEvent>,
}

impl ChannelEventSource {
    pub fn new(receiver: mpsc::UnboundedReceiver<InboundEvent>) -> Self {
        Self { receiver }
    }
}

#[async_trait]
impl EventSource for ChannelEventSource {
    async fn next_event(&mut self) -> Result<Option<InboundEvent>, DomainError> {
        Ok(self.receiver.recv().await)
    }
}
