use crate::{DnsRecord, DomainError};
use serde_json::{Map, Value};

/// Name of the real-time event that carries the record list.
pub const DNS_RECORDS_EVENT: &str = "dns_records";

/// A decoded real-time event: its name and raw JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    pub name: String,
    pub payload: Value,
}

impl InboundEvent {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// A `dns_records` event carrying the given records.
    pub fn dns_records(records: &[DnsRecord]) -> Self {
        Self::new(DNS_RECORDS_EVENT, RecordsPayload::payload_value(records))
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Payload of a `dns_records` event: `{ "records": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordsPayload {
    pub records: Vec<DnsRecord>,
}

impl RecordsPayload {
    /// Extracts the record list from an event payload.
    ///
    /// The payload must be an object whose `records` field is an array.
    /// Individual entries are never rejected; see [`DnsRecord::from_value`].
    pub fn from_value(payload: &Value) -> Result<Self, DomainError> {
        let object = payload.as_object().ok_or_else(|| {
            DomainError::MalformedPayload(format!("expected an object, got {}", kind(payload)))
        })?;

        let records = match object.get("records") {
            Some(Value::Array(entries)) => entries.iter().map(DnsRecord::from_value).collect(),
            Some(other) => {
                return Err(DomainError::MalformedPayload(format!(
                    "`records` must be an array, got {}",
                    kind(other)
                )))
            }
            None => {
                return Err(DomainError::MalformedPayload(
                    "missing `records` field".to_string(),
                ))
            }
        };

        Ok(Self { records })
    }

    fn payload_value(records: &[DnsRecord]) -> Value {
        let mut object = Map::new();
        object.insert(
            "records".to_string(),
            Value::Array(records.iter().map(DnsRecord::to_value).collect()),
        );
        Value::Object(object)
    }

    pub fn to_value(&self) -> Value {
        Self::payload_value(&self.records)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
