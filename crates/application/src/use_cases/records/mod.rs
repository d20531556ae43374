mod render_records;
mod subscribe_records;

pub use render_records::RenderRecordsUseCase;
pub use subscribe_records::{HandleOutcome, SubscribeRecordsUseCase, SubscriptionSummary};
