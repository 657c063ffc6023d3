use serde_json::Value;

/// Reduces npm's polymorphic `license` field to a plain string.
///
/// npm metadata carries either `"license": "MIT"` or the legacy
/// `"license": {"type": "MIT", "url": "..."}`. Anything else, or an object
/// without a string `type`, yields `None`.
pub fn normalize_license_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("type").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
