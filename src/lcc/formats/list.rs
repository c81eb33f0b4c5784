//! Built-in list formatters: plain text, JSON and YAML

use super::registry::{FormatError, ListFormatter};
use super::{render, DisplayMode};
use crate::lcc::call_number::CallNumber;
use serde::Serialize;

/// One serialized list entry: the rendered text plus the parsed parts.
#[derive(Serialize)]
struct Entry<'a> {
    display: String,
    #[serde(flatten)]
    call_number: &'a CallNumber,
}

fn entries(items: &[CallNumber], mode: DisplayMode) -> Vec<Entry<'_>> {
    items
        .iter()
        .map(|call_number| Entry {
            display: render(call_number, mode),
            call_number,
        })
        .collect()
}

/// One rendered call number per line
pub struct TextFormatter;

impl ListFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, items: &[CallNumber], mode: DisplayMode) -> Result<String, FormatError> {
        Ok(items
            .iter()
            .map(|item| render(item, mode) + "\n")
            .collect())
    }

    fn description(&self) -> &str {
        "One call number per line"
    }
}

/// Pretty-printed JSON array
pub struct JsonFormatter;

impl ListFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, items: &[CallNumber], mode: DisplayMode) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&entries(items, mode))
            .map(|json| json + "\n")
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON array with the parsed parts of each call number"
    }
}

/// YAML sequence
pub struct YamlFormatter;

impl ListFormatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, items: &[CallNumber], mode: DisplayMode) -> Result<String, FormatError> {
        serde_yaml::to_string(&entries(items, mode))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML sequence with the parsed parts of each call number"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CallNumber> {
        ["A4.B9.C2", "PR192.4.B3"]
            .iter()
            .map(|text| CallNumber::parse(text).unwrap())
            .collect()
    }

    #[test]
    fn test_text_formatter() {
        let out = TextFormatter.serialize(&sample(), DisplayMode::Separated).unwrap();
        assert_eq!(out, "A4.B9.C2\nPR192.4.B3\n");

        let out = TextFormatter.serialize(&sample(), DisplayMode::Compact).unwrap();
        assert_eq!(out, "A4B9C2\nPR192.4B3\n");
    }

    #[test]
    fn test_text_formatter_empty() {
        assert_eq!(TextFormatter.serialize(&[], DisplayMode::Separated), Ok(String::new()));
    }

    #[test]
    fn test_json_formatter() {
        let out = JsonFormatter.serialize(&sample(), DisplayMode::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["display"], "A4B9C2");
        assert_eq!(value[0]["text"], "A4.B9.C2");
        assert_eq!(value[0]["class_fraction"], serde_json::Value::Null);
        assert_eq!(value[1]["class_letters"], "PR");
        assert_eq!(value[1]["class_fraction"], "4");
        assert_eq!(value[1]["cutters"][0]["letter"], "B");
    }

    #[test]
    fn test_yaml_formatter() {
        let out = YamlFormatter.serialize(&sample()[1..], DisplayMode::Separated).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();

        assert_eq!(value[0]["display"].as_str(), Some("PR192.4.B3"));
        assert_eq!(value[0]["class_number"].as_str(), Some("192"));
        assert_eq!(value[0]["cutters"][0]["decimal"].as_str(), Some("3"));
    }
}
