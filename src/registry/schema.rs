use jsonschema::{Validator, validator_for};
use serde_json::{Number, Value};

use crate::domain::FieldValue;

use super::error::RegistryError;

/// Validator backed by a compiled JSON Schema.
pub(super) struct SchemaCheck {
    validator: Validator,
    target: ScalarTarget,
}

#[derive(Debug, Clone, Copy)]
enum ScalarTarget {
    Integer,
    Number,
    Boolean,
    AsIs,
}

impl SchemaCheck {
    pub(super) fn compile(name: &str, schema: &Value) -> Result<Self, RegistryError> {
        let validator = validator_for(schema)
            .map_err(|err| RegistryError::new(name, format!("invalid JSON schema: {err}")))?;
        let target = match schema.get("type").and_then(Value::as_str) {
            Some("integer") => ScalarTarget::Integer,
            Some("number") => ScalarTarget::Number,
            Some("boolean") => ScalarTarget::Boolean,
            _ => ScalarTarget::AsIs,
        };
        Ok(Self { validator, target })
    }

    pub(super) fn check(&self, value: &FieldValue) -> bool {
        self.validator.is_valid(&self.coerce(value))
    }

    /// Text typed into a widget is parsed when the schema expects a scalar.
    /// Unparseable text is left as a string so the schema rejects it.
    fn coerce(&self, value: &FieldValue) -> Value {
        let Some(text) = value.as_str() else {
            return value.to_json();
        };
        let trimmed = text.trim();
        let coerced = match self.target {
            ScalarTarget::Integer => trimmed.parse::<i64>().ok().map(Value::from),
            ScalarTarget::Number => trimmed
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
            ScalarTarget::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            ScalarTarget::AsIs => None,
        };
        coerced.unwrap_or_else(|| Value::String(text.to_string()))
    }
}
