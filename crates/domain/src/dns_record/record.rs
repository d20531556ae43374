use super::text::display_text;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

/// Display projection of a DNS resource record set.
///
/// All three fields are kept as the text that will be shown. Nothing is
/// parsed or validated: `rdataset` is whatever the producer serialized and
/// `ttl` may have arrived as a number or a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsRecord {
    /// Owner name (e.g. "example.com" or "@")
    pub name: String,
    /// Serialized resource data (e.g. "A 93.184.216.34")
    pub rdataset: String,
    /// Time to live, as text
    pub ttl: String,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        rdataset: impl Into<String>,
        ttl: impl ToString,
    ) -> Self {
        Self {
            name: name.into(),
            rdataset: rdataset.into(),
            ttl: ttl.to_string(),
        }
    }

    /// Builds a record from one entry of a `records` array.
    ///
    /// Missing fields become empty text. An entry that is not an object
    /// yields a record with three empty fields.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        let field = |key: &str| fields.get(key).map(display_text).unwrap_or_default();

        Self {
            name: field("name"),
            rdataset: field("rdataset"),
            ttl: field("ttl"),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "rdataset": self.rdataset,
            "ttl": self.ttl,
        })
    }
}

impl<'de> Deserialize<'de> for DnsRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
