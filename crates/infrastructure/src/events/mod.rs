//! Real-time event sources
//!
//! ## Components
//!
//! - `RecordsEventEmitter` / `ChannelEventSource`: in-process channel pair
//! - `StreamEventSource`: adapts any `futures::Stream` of events
//! - `JsonLinesEventSource`: newline-delimited frames from a reader
//! - `frame`: decoding of a single Socket.IO-style text frame
//!
//! ## Usage
//!
//! ```rust,no_run
//! use recordboard_domain::DnsRecord;
//! use recordboard_infrastructure::events::RecordsEventEmitter;
//!
//! let (emitter, source) = RecordsEventEmitter::new_enabled();
//! emitter.emit_records(&[DnsRecord::new("example.com", "A 93.184.216.34", 300)]);
//! // hand `source` to SubscribeRecordsUseCase::run
//! ```

pub mod emitter;
pub mod frame;
pub mod json_lines;
pub mod stream;

pub use emitter::{ChannelEventSource, RecordsEventEmitter};
pub use frame::{decode_frame, FrameError};
pub use json_lines::JsonLinesEventSource;
pub use stream::StreamEventSource;
