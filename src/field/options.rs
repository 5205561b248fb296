use std::sync::Arc;

use crate::registry::{self, UnknownValidator, ValidatorRegistry};

/// Instance configuration that is not part of the props surface.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub(crate) registry: Arc<ValidatorRegistry>,
    pub unknown_validator: UnknownValidator,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            registry: registry::shared(),
            unknown_validator: UnknownValidator::default(),
        }
    }
}

impl ControllerOptions {
    pub fn with_registry(mut self, registry: ValidatorRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_shared_registry(mut self, registry: Arc<ValidatorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_unknown_validator(mut self, fallback: UnknownValidator) -> Self {
        self.unknown_validator = fallback;
        self
    }

    /// Treat unregistered validator names as invalid.
    pub fn strict(self) -> Self {
        self.with_unknown_validator(UnknownValidator::Invalid)
    }

    pub fn registry(&self) -> Arc<ValidatorRegistry> {
        Arc::clone(&self.registry)
    }
}
