pub mod records;

// Re-export use cases
pub use records::{
    HandleOutcome, RenderRecordsUseCase, SubscribeRecordsUseCase, SubscriptionSummary,
};
