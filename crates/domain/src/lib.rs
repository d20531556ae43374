//! Recordboard Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod event;
pub mod table;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, OutputFormat, RenderConfig, SubscriptionConfig,
};
pub use dns_record::{display_text, DnsRecord};
pub use errors::DomainError;
pub use event::{InboundEvent, RecordsPayload, DNS_RECORDS_EVENT};
pub use table::{RecordTable, TableRow, COLUMN_HEADERS};
