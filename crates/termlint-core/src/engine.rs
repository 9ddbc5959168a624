use crate::dictionary::{Term, TermDictionary};
use crate::severity::SeverityLevel;

/// Shortest term name (in characters) matched by substring containment.
/// Shorter terms must equal the whole symbol name, otherwise one- to
/// three-letter entries would fire inside unrelated identifiers.
const SUBSTRING_MIN_CHARS: usize = 4;

/// Outcome of screening one symbol name: the term that fired, the symbol it
/// fired on and the derived level. Built fresh per check, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub term: Term,
    pub symbol: String,
    pub level: SeverityLevel,
}

/// Does `term_name` flag `symbol`?
///
/// Term names under `SUBSTRING_MIN_CHARS` characters require case-insensitive
/// equality with the whole symbol name; longer ones match anywhere inside it.
/// Case folding is Unicode default casing, independent of locale.
pub fn term_matches(symbol: &str, term_name: &str) -> bool {
    if term_name.chars().count() < SUBSTRING_MIN_CHARS {
        symbol.to_lowercase() == term_name.to_lowercase()
    } else {
        symbol.to_lowercase().contains(&term_name.to_lowercase())
    }
}

/// Screen one symbol name against the dictionary.
///
/// Scans in stored order and returns the first term that matches; at most one
/// match is ever reported per symbol. Pure: same inputs, same answer.
pub fn check(symbol: &str, dictionary: &TermDictionary) -> Option<MatchResult> {
    for term in dictionary.iter() {
        if term_matches(symbol, &term.name) {
            return Some(MatchResult {
                term: term.clone(),
                symbol: symbol.to_string(),
                level: SeverityLevel::from_code(&term.severity),
            });
        }
    }

    None
}
