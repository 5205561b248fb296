mod config;
mod format;
mod input;

pub use config::{FieldConfig, PolicyConfig, load_field_config};
pub use format::DocumentFormat;
pub use input::{load_document, parse_document_any, parse_document_str};
