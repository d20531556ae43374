use recordboard_domain::{DomainError, InboundEvent, RecordsPayload};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::RenderRecordsUseCase;
use crate::ports::{DisplaySurface, EventSource};

/// What happened to a single inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOutcome {
    /// The table was replaced with this many rows
    Rendered(usize),
    /// The event had another name
    Ignored,
    /// The payload had no usable `records` array; the display was cleared
    Malformed,
}

/// Counters reported when a subscription ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionSummary {
    pub received: u64,
    pub rendered: u64,
    pub ignored: u64,
    pub malformed: u64,
    pub last_row_count: Option<usize>,
}

/// Listens for the records event and forwards its `records` to the renderer.
pub struct SubscribeRecordsUseCase<S: DisplaySurface> {
    renderer: RenderRecordsUseCase<S>,
    event_name: String,
}

impl<S: DisplaySurface> SubscribeRecordsUseCase<S> {
    pub fn new(renderer: RenderRecordsUseCase<S>, event_name: impl Into<String>) -> Self {
        Self {
            renderer,
            event_name: event_name.into(),
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn renderer(&self) -> &RenderRecordsUseCase<S> {
        &self.renderer
    }

    pub fn into_renderer(self) -> RenderRecordsUseCase<S> {
        self.renderer
    }

    /// Processes one event.
    ///
    /// A records event without a usable `records` array still replaces the
    /// display, leaving it empty.
    ///
    /// # Errors
    ///
    /// * `DomainError::Surface` - If the surface failed while rendering
    pub fn handle(&mut self, event: InboundEvent) -> Result<HandleOutcome, DomainError> {
        if !event.is_named(&self.event_name) {
            debug!(event = %event.name, "Ignoring event");
            return Ok(HandleOutcome::Ignored);
        }

        let payload = match RecordsPayload::from_value(&event.payload) {
            Ok(payload) => payload,
            Err(e) => {
                self.renderer.execute(&[])?;
                warn!(event = %event.name, error = %e, "Malformed records event, display cleared");
                return Ok(HandleOutcome::Malformed);
            }
        };

        let rows = self.renderer.execute(&payload.records)?;
        info!(rows, "Displayed DNS records");

        Ok(HandleOutcome::Rendered(rows))
    }

    /// Consumes `source` until it is exhausted or `shutdown` fires.
    ///
    /// Undecodable frames are counted as malformed and skipped. Reader and
    /// surface failures end the subscription with an error.
    #[instrument(skip_all, fields(event = %self.event_name))]
    pub async fn run<E>(
        &mut self,
        source: &mut E,
        shutdown: CancellationToken,
    ) -> Result<SubscriptionSummary, DomainError>
    where
        E: EventSource + ?Sized,
    {
        info!("Subscription started");
        let mut summary = SubscriptionSummary::default();

        loop {
            let next = tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("Subscription: shutting down");
                    break;
                }
                next = source.next_event() => next,
            };

            let event = match next {
                Ok(Some(event)) => event,
                Ok(None) => {
                    info!("Event source exhausted");
                    break;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    summary.malformed += 1;
                    warn!(error = %e, "Dropping undecodable frame");
                    continue;
                }
            };

            summary.received += 1;
            match self.handle(event)? {
                HandleOutcome::Rendered(rows) => {
                    summary.rendered += 1;
                    summary.last_row_count = Some(rows);
                }
                HandleOutcome::Ignored => summary.ignored += 1,
                HandleOutcome::Malformed => {
                    summary.malformed += 1;
                    summary.last_row_count = Some(0);
                }
            }
        }

        info!(
            received = summary.received,
            rendered = summary.rendered,
            ignored = summary.ignored,
            malformed = summary.malformed,
            "Subscription finished"
        );

        Ok(summary)
    }
}
