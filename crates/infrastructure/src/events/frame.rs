//! Decoding of a single text frame into an [`InboundEvent`].
//!
//! Three frame forms are accepted:
//!
//! - Socket.IO event packets as seen on the wire: `42["dns_records",{...}]`,
//!   with an optional namespace (`42/admin,[...]`) and ack id (`4217[...]`)
//! - bare event arrays: `["dns_records",{...}]`
//! - objects: `{"event":"dns_records","data":{...}}`
//!
//! Engine.IO control packets (open, ping, pong, ...) and Socket.IO packets
//! other than EVENT are not events and decode to `None`.

use recordboard_domain::InboundEvent;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("event array must start with an event name")]
    MissingEventName,

    #[error("event object must have a string `event` field")]
    MissingEventField,

    #[error("namespace is not followed by ','")]
    UnterminatedNamespace,

    #[error("unsupported packet type '{0}'")]
    UnsupportedPacket(char),

    #[error("unrecognised frame")]
    Unrecognised,
}

/// Decodes one frame.
///
/// Returns `Ok(None)` for blank lines and non-event packets.
pub fn decode_frame(frame: &str) -> Result<Option<InboundEvent>, FrameError> {
    let frame = frame.trim();

    match frame.chars().next() {
        None => Ok(None),
        Some('[') => decode_event_array(frame).map(Some),
        Some('{') => decode_event_object(frame).map(Some),
        Some(c) if c.is_ascii_digit() => decode_packet(frame),
        Some(_) => Err(FrameError::Unrecognised),
    }
}

// Engine.IO packet type 4 (message) wrapping Socket.IO packet type 2 (event).
fn decode_packet(frame: &str) -> Result<Option<InboundEvent>, FrameError> {
    let mut chars = frame.chars();

    match chars.next() {
        Some('4') => {}
        // open, close, ping, pong, upgrade, noop
        Some('0'..='3' | '5' | '6') => return Ok(None),
        Some(c) => return Err(FrameError::UnsupportedPacket(c)),
        None => return Ok(None),
    }

    match chars.next() {
        Some('2') => {}
        // connect, disconnect, ack, connect_error
        Some('0' | '1' | '3' | '4') | None => return Ok(None),
        Some(c) => return Err(FrameError::UnsupportedPacket(c)),
    }

    let mut body = chars.as_str();

    if body.starts_with('/') {
        let (_, rest) = body
            .split_once(',')
            .ok_or(FrameError::UnterminatedNamespace)?;
        body = rest;
    }

    let body = body.trim_start_matches(|c: char| c.is_ascii_digit());

    decode_event_array(body).map(Some)
}

fn decode_event_array(text: &str) -> Result<InboundEvent, FrameError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(mut items) = value else {
        return Err(FrameError::MissingEventName);
    };
    if items.is_empty() {
        return Err(FrameError::MissingEventName);
    }

    let payload = if items.len() > 1 {
        items.swap_remove(1)
    } else {
        Value::Null
    };

    match items.swap_remove(0) {
        Value::String(name) => Ok(InboundEvent::new(name, payload)),
        _ => Err(FrameError::MissingEventName),
    }
}

fn decode_event_object(text: &str) -> Result<InboundEvent, FrameError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(mut fields) = value else {
        return Err(FrameError::MissingEventField);
    };

    let name = match fields.remove("event") {
        Some(Value::String(name)) => name,
        _ => return Err(FrameError::MissingEventField),
    };
    let payload = fields.remove("data").unwrap_or(Value::Null);

    Ok(InboundEvent::new(name, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordboard_domain::{RecordsPayload, DNS_RECORDS_EVENT};
    use serde_json::json;

    const RECORDS: &str =
        r#"{"records":[{"name":"example.com","rdataset":"A 93.184.216.34","ttl":300}]}"#;

    fn decode(frame: &str) -> InboundEvent {
        decode_frame(frame).unwrap().unwrap()
    }

    #[test]
    fn test_socketio_event_packet() {
        let event = decode(&format!(r#"42["dns_records",{RECORDS}]"#));

        assert_eq!(event.name, DNS_RECORDS_EVENT);
        let payload = RecordsPayload::from_value(&event.payload).unwrap();
        assert_eq!(payload.records[0].ttl, "300");
    }

    #[test]
    fn test_socketio_namespace_and_ack_id() {
        let event = decode(&format!(r#"42/dashboard,17["dns_records",{RECORDS}]"#));
        assert_eq!(event.name, DNS_RECORDS_EVENT);

        let event = decode(r#"4231["status","ok"]"#);
        assert_eq!(event.name, "status");
        assert_eq!(event.payload, json!("ok"));
    }

    #[test]
    fn test_bare_array_and_object_forms() {
        let array = decode(&format!(r#"["dns_records",{RECORDS}]"#));
        let object = decode(&format!(r#"{{"event":"dns_records","data":{RECORDS}}}"#));
        assert_eq!(array, object);
    }

    #[test]
    fn test_event_without_payload() {
        let event = decode(r#"["refresh"]"#);
        assert_eq!(event.payload, Value::Null);
    }

    #[test]
    fn test_control_packets_are_skipped() {
        for frame in ["", "   ", "2", "3", "40", "41", r#"0{"sid":"abc","pingInterval":25000}"#, "6"] {
            assert!(decode_frame(frame).unwrap().is_none(), "frame {frame:?}");
        }
    }

    #[test]
    fn test_invalid_frames() {
        assert!(matches!(decode_frame("hello"), Err(FrameError::Unrecognised)));
        assert!(matches!(decode_frame("[1, 2]"), Err(FrameError::MissingEventName)));
        assert!(matches!(decode_frame("[]"), Err(FrameError::MissingEventName)));
        assert!(matches!(decode_frame(r#"{"data":{}}"#), Err(FrameError::MissingEventField)));
        assert!(matches!(decode_frame("42[not json"), Err(FrameError::Json(_))));
        assert!(matches!(decode_frame("42/admin"), Err(FrameError::UnterminatedNamespace)));
        assert!(matches!(decode_frame("45[\"x\"]"), Err(FrameError::UnsupportedPacket('5'))));
        assert!(matches!(decode_frame("7"), Err(FrameError::UnsupportedPacket('7'))));
    }
}
