use std::path::Path;

use serde::Deserialize;
use termlint_core::dictionary::{LoadError, Term, TermDictionary, TermDictionaryLoader};

// Wire form of one record in the terms-en.json format. Every field is
// optional: curation tools leave blanks, and a blank means "no information",
// not a rejected record.
#[derive(Debug, Deserialize)]
struct TermRecord {
    #[serde(rename = "Id", default)]
    id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Class", default)]
    class: String,
    #[serde(rename = "Context", default)]
    context: String,
    #[serde(rename = "Severity", default)]
    severity: String,
    #[serde(rename = "Recommendation", default)]
    recommendation: String,
    #[serde(rename = "Why", default)]
    why: String,
}

impl From<TermRecord> for Term {
    fn from(record: TermRecord) -> Self {
        Term {
            id: record.id,
            name: record.name,
            class: record.class,
            context: record.context,
            severity: record.severity,
            recommendation: record.recommendation,
            why: record.why,
        }
    }
}

/// Loads term dictionaries in the terms-en.json format.
pub struct TermFileLoader;

impl TermFileLoader {
    /// Parse a JSON document into a dictionary, preserving record order.
    pub fn from_json(json: &str) -> Result<TermDictionary, LoadError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let records: Vec<TermRecord> =
            serde_json::from_value(value).map_err(|e| LoadError::InvalidFormat(e.to_string()))?;

        Ok(TermDictionary::new(
            records.into_iter().map(Term::from).collect(),
        ))
    }

    /// Load the dictionary shipped with the crate.
    pub fn load_embedded() -> Result<TermDictionary, LoadError> {
        let json = include_str!("../data/terms-en.json");
        tracing::info!("Loading embedded term dictionary...");
        let dictionary = Self::from_json(json)?;
        tracing::info!("Loaded {} terms", dictionary.len());
        Ok(dictionary)
    }

    /// Load a dictionary from a file path.
    pub fn load_path(path: &Path) -> Result<TermDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading term dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dictionary = Self::from_json(&json)?;
        tracing::info!("Loaded {} terms from file", dictionary.len());
        Ok(dictionary)
    }
}

impl TermDictionaryLoader for TermFileLoader {
    fn load_from_file(&self, path: &Path) -> Result<TermDictionary, LoadError> {
        Self::load_path(path)
    }

    fn supported_formats(&self) -> Vec<String> {
        vec!["json".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_in_source_order() {
        let json = r#"[
            {"Id": "1", "Name": "Weird", "Severity": "2"},
            {"Id": "2", "Name": "Alpha", "Severity": "1"}
        ]"#;

        let dictionary = TermFileLoader::from_json(json).unwrap();
        let names: Vec<&str> = dictionary.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Weird", "Alpha"]);
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let json = r#"[{"Name": "Weird"}]"#;

        let dictionary = TermFileLoader::from_json(json).unwrap();
        let term = &dictionary.terms()[0];
        assert_eq!(term.name, "Weird");
        assert_eq!(term.id, "");
        assert_eq!(term.severity, "");
        assert_eq!(term.recommendation, "");
        assert_eq!(term.why, "");
    }

    #[test]
    fn duplicate_records_are_preserved() {
        let json = r#"[
            {"Id": "1", "Name": "Weird"},
            {"Id": "1", "Name": "Weird"}
        ]"#;

        let dictionary = TermFileLoader::from_json(json).unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn garbage_input_is_a_parse_error() {
        let result = TermFileLoader::from_json("not json at all");
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }

    #[test]
    fn non_array_document_is_an_invalid_format() {
        let result = TermFileLoader::from_json(r#"{"Name": "Weird"}"#);
        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }

    #[test]
    fn missing_file_is_reported_as_such() {
        let result = TermFileLoader::load_path(Path::new("/no/such/terms-en.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn embedded_dictionary_loads_and_is_not_empty() {
        let dictionary = TermFileLoader::load_embedded().unwrap();
        assert!(!dictionary.is_empty());
        // every shipped record carries a searchable name
        assert!(dictionary.iter().all(|t| !t.name.is_empty()));
    }

    #[test]
    fn loader_trait_reports_json_support() {
        assert_eq!(TermFileLoader.supported_formats(), vec!["json".to_string()]);
    }
}
