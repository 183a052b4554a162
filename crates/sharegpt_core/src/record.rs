use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const VALUE_KEY: &str = "value";

/// A record that could not be pulled out of its page dump.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("unexpected shape at `{0}`")]
    WrongShape(&'static str),
    #[error("io error: {0}")]
    Io(String),
}

/// One conversation turn.
///
/// Only `value` is interpreted; every other field is carried through untouched
/// and in its original key order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    fields: Map<String, Value>,
}

impl Message {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Convenience constructor for a `{from, value}` turn.
    pub fn from_text(from: &str, value: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("from".to_string(), Value::String(from.to_string()));
        fields.insert(VALUE_KEY.to_string(), Value::String(value.into()));
        Self { fields }
    }

    /// The raw `value` field, if present.
    pub fn value(&self) -> Option<&Value> {
        self.fields.get(VALUE_KEY)
    }

    /// The `value` field when it holds text.
    pub fn text(&self) -> Option<&str> {
        self.value().and_then(Value::as_str)
    }

    /// Overwrite `value` in place, keeping its position among the other fields.
    pub fn set_value(&mut self, text: String) {
        self.fields.insert(VALUE_KEY.to_string(), Value::String(text));
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// One conversation as written to the cleaned dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Value,
    pub conversations: Vec<Message>,
}

/// Parse a page dump and extract its record.
pub fn parse_record(text: &str) -> Result<Record, StructuralError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| StructuralError::InvalidJson(e.to_string()))?;
    extract_record(value)
}

/// Extract `pageProps.id` and `pageProps.content.items` from a parsed page dump.
pub fn extract_record(value: Value) -> Result<Record, StructuralError> {
    let Value::Object(mut root) = value else {
        return Err(StructuralError::WrongShape("$"));
    };
    let mut page = match root.remove("pageProps") {
        Some(Value::Object(page)) => page,
        Some(_) => return Err(StructuralError::WrongShape("pageProps")),
        None => return Err(StructuralError::MissingField("pageProps")),
    };
    let id = page
        .remove("id")
        .ok_or(StructuralError::MissingField("pageProps.id"))?;
    let mut content = match page.remove("content") {
        Some(Value::Object(content)) => content,
        Some(_) => return Err(StructuralError::WrongShape("pageProps.content")),
        None => return Err(StructuralError::MissingField("pageProps.content")),
    };
    let items = match content.remove("items") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(StructuralError::WrongShape("pageProps.content.items")),
        None => return Err(StructuralError::MissingField("pageProps.content.items")),
    };

    let conversations = items
        .into_iter()
        .map(|item| match item {
            Value::Object(fields) => Ok(Message::new(fields)),
            _ => Err(StructuralError::WrongShape("pageProps.content.items[]")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record { id, conversations })
}
