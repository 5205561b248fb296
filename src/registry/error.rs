#[derive(Debug, Clone)]
pub struct RegistryError {
    pub name: String,
    pub message: String,
}

impl RegistryError {
    pub(crate) fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validator '{}': {}", self.name, self.message)
    }
}

impl std::error::Error for RegistryError {}
