//! Named validators resolved by key at validation time.
//!
//! A [`ValidatorRegistry`] is an explicit map from a stable name to a
//! predicate. Fields reference entries through
//! [`ValidationPolicy::Named`](crate::ValidationPolicy::Named); the lookup
//! happens on every run so a registry can be swapped between runs.

mod builtin;
mod error;
mod schema;

use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{FieldValue, Predicate, ValidationPolicy};

pub use error::RegistryError;
use schema::SchemaCheck;

static SHARED: LazyLock<Arc<ValidatorRegistry>> =
    LazyLock::new(|| Arc::new(ValidatorRegistry::with_builtins()));

/// Process-wide registry holding the built-in validators.
pub fn shared() -> Arc<ValidatorRegistry> {
    Arc::clone(&SHARED)
}

/// Outcome of a named lookup that finds nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownValidator {
    /// The run reports the field as valid.
    #[default]
    Valid,
    /// The run reports the field as invalid.
    Invalid,
}

impl UnknownValidator {
    fn outcome(self) -> bool {
        matches!(self, UnknownValidator::Valid)
    }
}

#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: IndexMap<String, Predicate>,
}

impl ValidatorRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `required`, `email`, `url`, `number` and `price`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin::install(&mut registry);
        registry
    }

    /// Register `predicate` under `name`, returning the entry it replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F) -> Option<Predicate>
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(%name, "registered validator");
        self.validators.insert(name, Arc::new(predicate))
    }

    /// Register a validator requiring the whole textual value to match `pattern`.
    pub fn register_pattern(&mut self, name: &str, pattern: &str) -> Result<(), RegistryError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored)
            .map_err(|err| RegistryError::new(name, format!("invalid pattern: {err}")))?;
        self.register(name, move |value| regex.is_match(&value.display_text()));
        Ok(())
    }

    /// Register a validator checking the value against a JSON Schema.
    pub fn register_schema(&mut self, name: &str, schema: &Value) -> Result<(), RegistryError> {
        let check = SchemaCheck::compile(name, schema)?;
        self.register(name, move |value| check.check(value));
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Predicate> {
        self.validators.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.validators.get(name)
    }

    /// Run the validator registered as `name`. `None` when nothing is registered.
    pub fn invoke(&self, name: &str, value: &FieldValue) -> Option<bool> {
        self.validators.get(name).map(|predicate| predicate(value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Decide `candidate` under `policy`.
    pub fn evaluate(
        &self,
        policy: &ValidationPolicy,
        candidate: &FieldValue,
        unknown: UnknownValidator,
    ) -> bool {
        match policy {
            ValidationPolicy::Predicate(predicate) => predicate(candidate),
            ValidationPolicy::Named(name) => match self.invoke(name, candidate) {
                Some(valid) => valid,
                None => {
                    warn!(%name, fallback = ?unknown, "validator is not registered");
                    unknown.outcome()
                }
            },
            ValidationPolicy::All(policies) => policies
                .iter()
                .all(|policy| self.evaluate(policy, candidate, unknown)),
        }
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}
