//! Body decoding and envelope extraction

use crate::types::JsonValue;

/// A decoded response body: parsed JSON, or the raw text when the body is
/// not JSON (some tenants answer errors with plain text).
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedBody {
    Json(JsonValue),
    Text(String),
}

impl DecodedBody {
    /// The parsed JSON value, if this body was JSON
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            DecodedBody::Json(v) => Some(v),
            DecodedBody::Text(_) => None,
        }
    }
}

/// Decode a raw body, attempting JSON first and keeping the text verbatim on
/// failure. Never errors.
pub fn decode_body(raw: &str) -> DecodedBody {
    match serde_json::from_str::<JsonValue>(raw) {
        Ok(value) => DecodedBody::Json(value),
        Err(_) => DecodedBody::Text(raw.to_string()),
    }
}

/// The known envelope shapes wrapping a list of result records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// The value itself is the list
    BareList,
    /// `{ "Items": [...] }`
    ItemsWrapped,
    /// `{ "result": [...] }`
    ResultWrapped,
    /// `{ "List": [...] }`
    ListWrapped,
    /// None of the known shapes
    Unknown,
}

impl Envelope {
    /// The wrapping key for keyed envelopes
    fn key(self) -> Option<&'static str> {
        match self {
            Envelope::ItemsWrapped => Some("Items"),
            Envelope::ResultWrapped => Some("result"),
            Envelope::ListWrapped => Some("List"),
            Envelope::BareList | Envelope::Unknown => None,
        }
    }
}

/// Classify which envelope shape a parsed value carries.
///
/// Keyed shapes are checked in the order the wild shows them: `Items`,
/// `result`, `List`. A key only counts when it actually holds an array.
pub fn classify_envelope(value: &JsonValue) -> Envelope {
    if value.is_array() {
        return Envelope::BareList;
    }

    for envelope in [
        Envelope::ItemsWrapped,
        Envelope::ResultWrapped,
        Envelope::ListWrapped,
    ] {
        let key = envelope.key().unwrap();
        if value.get(key).is_some_and(JsonValue::is_array) {
            return envelope;
        }
    }

    Envelope::Unknown
}

/// Extract the result records from whichever envelope shape is present.
///
/// Never fails; an unknown shape yields an empty list.
pub fn extract_list(value: &JsonValue) -> Vec<JsonValue> {
    match classify_envelope(value) {
        Envelope::BareList => value.as_array().cloned().unwrap_or_default(),
        envelope @ (Envelope::ItemsWrapped | Envelope::ResultWrapped | Envelope::ListWrapped) => {
            value[envelope.key().unwrap()]
                .as_array()
                .cloned()
                .unwrap_or_default()
        }
        Envelope::Unknown => Vec::new(),
    }
}
