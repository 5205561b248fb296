use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// Predicate deciding whether a candidate value is valid.
pub type Predicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// Rule used to decide a field's validity.
#[derive(Clone)]
pub enum ValidationPolicy {
    /// Inline predicate.
    Predicate(Predicate),
    /// Key of a validator in a [`ValidatorRegistry`](crate::ValidatorRegistry).
    Named(String),
    /// Every member must pass. An empty list is valid.
    All(Vec<ValidationPolicy>),
}

impl ValidationPolicy {
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn all(policies: impl IntoIterator<Item = ValidationPolicy>) -> Self {
        Self::All(policies.into_iter().collect())
    }
}

impl fmt::Debug for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::All(policies) => f.debug_tuple("All").field(policies).finish(),
        }
    }
}

impl From<&str> for ValidationPolicy {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ValidationPolicy {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Vec<ValidationPolicy>> for ValidationPolicy {
    fn from(policies: Vec<ValidationPolicy>) -> Self {
        Self::All(policies)
    }
}

/// Events that run validation. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerFlags {
    pub validate_on_start: bool,
    pub validate_on_change: bool,
    pub validate_on_blur: bool,
}

impl TriggerFlags {
    pub fn with_on_start(mut self, enabled: bool) -> Self {
        self.validate_on_start = enabled;
        self
    }

    pub fn with_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    pub fn with_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }
}
