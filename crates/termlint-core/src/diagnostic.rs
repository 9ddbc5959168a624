use crate::engine::MatchResult;
use crate::severity::SeverityLevel;

/// Payload handed to the reporting layer for one flagged symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule_id: String,
    pub level: SeverityLevel,
    /// One-line summary naming the term, the symbol, the raw severity code
    /// and the recommendation.
    pub message: String,
    /// Extended text: a recommendation line and a reason line.
    pub description: String,
    pub term_name: String,
    pub symbol: String,
}

impl MatchResult {
    /// Build the reportable payload for this match.
    pub fn to_diagnostic(&self, rule_id: &str) -> Diagnostic {
        Diagnostic {
            rule_id: rule_id.to_string(),
            level: self.level,
            message: format!(
                "Symbol '{}' matches flagged term '{}' (severity {}): {}",
                self.symbol, self.term.name, self.term.severity, self.term.recommendation
            ),
            description: format!(
                "Recommendation: {}\nReason: {}",
                self.term.recommendation, self.term.why
            ),
            term_name: self.term.name.clone(),
            symbol: self.symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Term;

    fn sample_match() -> MatchResult {
        MatchResult {
            term: Term {
                id: "1234".to_string(),
                name: "Weird".to_string(),
                class: "Accessibility".to_string(),
                context: "Shouldn't use it".to_string(),
                severity: "2".to_string(),
                recommendation: "Reconsider renaming".to_string(),
                why: "Weird is in the eye of the beholder".to_string(),
            },
            symbol: "WeirdValue".to_string(),
            level: SeverityLevel::Warning,
        }
    }

    #[test]
    fn message_names_term_symbol_code_and_recommendation() {
        let diagnostic = sample_match().to_diagnostic("TL0001");

        assert!(diagnostic.message.contains("WeirdValue"));
        assert!(diagnostic.message.contains("Weird"));
        assert!(diagnostic.message.contains("severity 2"));
        assert!(diagnostic.message.contains("Reconsider renaming"));
    }

    #[test]
    fn description_has_recommendation_and_reason_lines() {
        let diagnostic = sample_match().to_diagnostic("TL0001");

        assert_eq!(
            diagnostic.description,
            "Recommendation: Reconsider renaming\nReason: Weird is in the eye of the beholder"
        );
    }

    #[test]
    fn carries_rule_id_and_level() {
        let diagnostic = sample_match().to_diagnostic("TL0001");

        assert_eq!(diagnostic.rule_id, "TL0001");
        assert_eq!(diagnostic.level, SeverityLevel::Warning);
        assert_eq!(diagnostic.term_name, "Weird");
        assert_eq!(diagnostic.symbol, "WeirdValue");
    }
}
