pub mod record;
pub mod text;

pub use record::DnsRecord;
pub use text::display_text;
