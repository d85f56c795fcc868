//! The relayed payload and request body normalization.
//!
//! The popup posts whatever it has; the content script expects every field
//! to be present. Each field of a write body is extracted on its own into
//! its declared type, and falls back to its default when it does not fit,
//! so one bad value never takes the others down with it.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Number, Value};

use crate::error::{Error, Result};

/// Last submitted message and search filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// Message to send to sellers. Non-strings become `""`.
    pub message: String,
    /// Marketplace search term. Non-strings become `""`.
    pub search_keyword: String,
    /// Upper price bound. Non-numbers become `null`.
    pub max_price: Option<Number>,
    /// Lower price bound. Non-numbers become `null`.
    pub min_price: Option<Number>,
}

/// Top-level keys of a write body with their values left unparsed. Later
/// duplicates replace earlier ones.
type RawFields = HashMap<String, Box<RawValue>>;

/// Shape accepted in strict mode: absent or `null` fields still default,
/// anything else must have the declared type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StrictBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    search_keyword: Option<String>,
    #[serde(default)]
    max_price: Option<Number>,
    #[serde(default)]
    min_price: Option<Number>,
}

impl From<StrictBody> for Payload {
    fn from(body: StrictBody) -> Self {
        Self {
            message: body.message.unwrap_or_default(),
            search_keyword: body.search_keyword.unwrap_or_default(),
            max_price: body.max_price,
            min_price: body.min_price,
        }
    }
}

impl Payload {
    /// Normalize a raw request body. Never fails: an empty body, invalid
    /// JSON or a non-object value all yield the default payload.
    pub fn from_body(body: &[u8]) -> Self {
        let fields: RawFields = match serde_json::from_slice(body) {
            Ok(fields) => fields,
            Err(_) => return Payload::default(),
        };

        Self {
            message: lenient_field(&fields, "message").unwrap_or_default(),
            search_keyword: lenient_field(&fields, "searchKeyword").unwrap_or_default(),
            max_price: lenient_field(&fields, "maxPrice"),
            min_price: lenient_field(&fields, "minPrice"),
        }
    }

    /// Strict variant of [`Payload::from_body`]. An empty body is still
    /// treated as `{}`.
    pub fn from_body_strict(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::InvalidBody(format!("malformed JSON: {}", e)))?;
        if !value.is_object() {
            return Err(Error::InvalidBody(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )));
        }

        StrictBody::deserialize(value)
            .map(Payload::from)
            .map_err(|e| Error::InvalidBody(e.to_string()))
    }

    /// Dispatch on the configured mode.
    pub fn parse(body: &[u8], strict: bool) -> Result<Self> {
        if strict {
            Self::from_body_strict(body)
        } else {
            Ok(Self::from_body(body))
        }
    }
}

/// `None` when the key is absent or its value does not parse as `T`
/// (wrong type, `null`, or a number outside the `f64` range).
fn lenient_field<T: DeserializeOwned>(fields: &RawFields, key: &str) -> Option<T> {
    fields
        .get(key)
        .and_then(|raw| serde_json::from_str(raw.get()).ok())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
