use crate::event::DNS_RECORDS_EVENT;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionConfig {
    /// Event name carrying the record list (default: "dns_records")
    #[serde(default = "default_event")]
    pub event: String,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            event: default_event(),
        }
    }
}

fn default_event() -> String {
    DNS_RECORDS_EVENT.to_string()
}
