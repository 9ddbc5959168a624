use std::path::Path;
use std::slice;

/// One curated dictionary entry.
///
/// Fields beyond `name` and `severity` are informational and flow into the
/// diagnostic unchanged. Records are immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Term {
    /// Opaque identifier, unique per term in a well-formed dictionary.
    /// Uniqueness is not enforced; duplicates just produce redundant
    /// candidates.
    pub id: String,
    /// The word or phrase to search for.
    pub name: String,
    /// Category label, e.g. "Accessibility".
    pub class: String,
    /// Note on why the term is flagged.
    pub context: String,
    /// Raw severity code, interpreted by `SeverityLevel::from_code`.
    pub severity: String,
    /// Suggested fix.
    pub recommendation: String,
    /// Rationale text.
    pub why: String,
}

/// Ordered, immutable term collection for one analysis run.
///
/// Source order is preserved and duplicates are kept; checks scan linearly,
/// so the first term in file order wins on ties. The collection is read-only
/// and can be shared across concurrent checks without locking.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    terms: Vec<Term>,
}

impl TermDictionary {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> slice::Iter<'_, Term> {
        self.terms.iter()
    }
}

/// Load term dictionaries from files
pub trait TermDictionaryLoader {
    /// Load a dictionary from a file path
    fn load_from_file(&self, path: &Path) -> Result<TermDictionary, LoadError>;

    /// Supported file formats
    fn supported_formats(&self) -> Vec<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(id: &str, name: &str) -> Term {
        Term {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn preserves_source_order() {
        let dict = TermDictionary::new(vec![term("1", "bravo"), term("2", "alpha")]);

        let names: Vec<&str> = dict.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["bravo", "alpha"]);
    }

    #[test]
    fn keeps_duplicate_entries() {
        let dict = TermDictionary::new(vec![term("1", "alpha"), term("1", "alpha")]);

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.terms()[0], dict.terms()[1]);
    }

    #[test]
    fn empty_dictionary() {
        let dict = TermDictionary::default();

        assert!(dict.is_empty());
        assert_eq!(dict.iter().count(), 0);
    }
}
