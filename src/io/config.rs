use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{FieldValue, TriggerFlags, ValidationPolicy},
    field::ControllerOptions,
    registry::{self, UnknownValidator},
    widgets::TextInputProps,
};

use super::{DocumentFormat, input};

/// One validator name or a list of names that must all pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyConfig {
    One(String),
    All(Vec<String>),
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig::All(Vec::new())
    }
}

impl From<&PolicyConfig> for ValidationPolicy {
    fn from(config: &PolicyConfig) -> Self {
        match config {
            PolicyConfig::One(name) => ValidationPolicy::named(name.clone()),
            PolicyConfig::All(names) => {
                ValidationPolicy::all(names.iter().cloned().map(ValidationPolicy::Named))
            }
        }
    }
}

/// Declarative description of one text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub label: String,
    pub placeholder: Option<String>,
    pub value: FieldValue,
    pub secure: bool,
    pub validate: PolicyConfig,
    pub validate_on_start: bool,
    pub validate_on_change: bool,
    pub validate_on_blur: bool,
    /// Unregistered validator names make the field invalid.
    pub strict: bool,
    /// Extra validators: name to regular expression.
    pub patterns: IndexMap<String, String>,
    /// Extra validators: name to JSON Schema.
    pub schemas: IndexMap<String, Value>,
}

impl FieldConfig {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("invalid field configuration")
    }

    pub fn parse(contents: &str, format: DocumentFormat) -> Result<Self> {
        Self::from_value(input::parse_document_any(contents, format)?)
    }

    pub fn triggers(&self) -> TriggerFlags {
        TriggerFlags::default()
            .with_on_start(self.validate_on_start)
            .with_on_change(self.validate_on_change)
            .with_on_blur(self.validate_on_blur)
    }

    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::from(&self.validate)
    }

    pub fn widget_props(&self) -> TextInputProps {
        let mut props = TextInputProps::new(self.label.clone()).with_secure(self.secure);
        props.placeholder = self.placeholder.clone();
        props
    }

    /// Controller options holding the built-ins plus the configured
    /// pattern and schema validators.
    pub fn controller_options(&self) -> Result<ControllerOptions> {
        let mut options = ControllerOptions::default();
        if !self.patterns.is_empty() || !self.schemas.is_empty() {
            let mut registry = (*registry::shared()).clone();
            for (name, pattern) in &self.patterns {
                registry.register_pattern(name, pattern)?;
            }
            for (name, schema) in &self.schemas {
                registry.register_schema(name, schema)?;
            }
            options = options.with_registry(registry);
        }
        if self.strict {
            options = options.with_unknown_validator(UnknownValidator::Invalid);
        }
        Ok(options)
    }
}

/// Load a [`FieldConfig`] from a file.
pub fn load_field_config(path: &Path) -> Result<FieldConfig> {
    let document = input::load_document(path)?;
    FieldConfig::from_value(document)
        .with_context(|| format!("failed to load field config from {}", path.display()))
}
