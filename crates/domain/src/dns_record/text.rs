use serde_json::{Number, Value};

/// Converts a JSON field value into the text shown in a table cell.
///
/// Fields are opaque: strings pass through verbatim, numbers and booleans use
/// their literal form, and `null` (or an absent field) becomes empty text.
/// Arrays and objects fall back to compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64 Display drops the trailing ".0" that serde_json would print
    match n.as_f64() {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
