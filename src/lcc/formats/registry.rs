//! Format registry for call number lists
//!
//! Each output format implements the `ListFormatter` trait and is registered
//! by name with a `FormatRegistry`.

use crate::lcc::call_number::CallNumber;
use crate::lcc::formats::DisplayMode;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Unknown display mode '{0}' (expected 'separated' or 'compact')")]
    UnknownDisplayMode(String),
}

/// Trait for call number list formatters
pub trait ListFormatter: Send + Sync {
    /// The name of this format (e.g., "text", "json")
    fn name(&self) -> &str;

    /// Serialize a list of call numbers, rendering each in `mode`
    fn serialize(&self, items: &[CallNumber], mode: DisplayMode) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of list formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn ListFormatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: ListFormatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ListFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a list using the named format
    pub fn serialize(
        &self,
        items: &[CallNumber],
        format: &str,
        mode: DisplayMode,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(items, mode)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TextFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test formatter
    struct CountFormatter;
    impl ListFormatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }
        fn serialize(&self, items: &[CallNumber], _mode: DisplayMode) -> Result<String, FormatError> {
            Ok(items.len().to_string())
        }
        fn description(&self) -> &str {
            "Number of call numbers"
        }
    }

    fn sample() -> Vec<CallNumber> {
        vec![
            CallNumber::parse("A4").unwrap(),
            CallNumber::parse("B1.C2").unwrap(),
        ]
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());

        registry.register(CountFormatter);
        assert!(registry.has("count"));
        assert_eq!(registry.list_formats(), vec!["count"]);
        assert_eq!(registry.get("count").map(|f| f.description()), Some("Number of call numbers"));
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);

        let result = registry.serialize(&sample(), "count", DisplayMode::Separated);
        assert_eq!(result, Ok("2".to_string()));
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let result = registry.serialize(&sample(), "nonexistent", DisplayMode::Separated);

        match result.unwrap_err() {
            FormatError::FormatNotFound(name) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);
        registry.register(CountFormatter);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["json", "text", "yaml"]);
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("xml".to_string());
        assert_eq!(format!("{err}"), "Format 'xml' not found");

        let err = FormatError::SerializationError("boom".to_string());
        assert_eq!(format!("{err}"), "Serialization error: boom");
    }
}
