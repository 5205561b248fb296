use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value tracked by a field.
///
/// `None` models a field whose caller never supplied a value. Change events
/// always store text, but the initial value may be any JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Option<Value>);

impl FieldValue {
    pub fn unset() -> Self {
        Self(None)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self(Some(Value::String(text.into())))
    }

    pub fn json(value: Value) -> Self {
        Self(Some(value))
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// Unset, `null`, `""`, `[]` and `{}` carry no value. Numbers and
    /// booleans always do.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => true,
            Some(Value::String(text)) => text.is_empty(),
            Some(Value::Array(items)) => items.is_empty(),
            Some(Value::Object(map)) => map.is_empty(),
            Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_ref().and_then(Value::as_str)
    }

    pub fn as_json(&self) -> Option<&Value> {
        self.0.as_ref()
    }

    /// The value as JSON, with unset mapped to `null`.
    pub fn to_json(&self) -> Value {
        self.0.clone().unwrap_or(Value::Null)
    }

    /// Text shown by widgets and matched by pattern validators.
    pub fn display_text(&self) -> String {
        self.0.as_ref().map(value_to_string).unwrap_or_default()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::json(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(num) => num.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
