use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|table| {
                serde_json::to_value(table).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse `contents`, trying `preferred` first and then every other
/// available format.
///
/// YAML reads almost any text as a bare string, so the first object or
/// array wins; a scalar is returned only when no format yields structure.
pub fn parse_document_any(contents: &str, preferred: DocumentFormat) -> Result<Value> {
    let candidates = std::iter::once(preferred).chain(
        DocumentFormat::available_formats()
            .into_iter()
            .filter(|format| *format != preferred),
    );
    let mut primary = None;
    let mut scalar = None;
    for candidate in candidates {
        match parse_document_str(contents, candidate) {
            Ok(value) if value.is_object() || value.is_array() => return Ok(value),
            Ok(value) => {
                scalar.get_or_insert(value);
            }
            Err(err) => {
                primary.get_or_insert(err);
            }
        }
    }
    if let Some(value) = scalar {
        return Ok(value);
    }
    let primary = primary.unwrap_or_else(|| anyhow!("no document format is enabled"));
    let tried = DocumentFormat::available_formats()
        .into_iter()
        .map(|format| format.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(anyhow!("tried {tried} (first error: {primary:#})"))
}

/// Read and parse a document, using the file extension as the format hint.
pub fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read file {}", path.display()))?;
    let format = DocumentFormat::from_path(path).unwrap_or_default();
    parse_document_any(&contents, format)
        .with_context(|| format!("failed to parse {}", path.display()))
}
