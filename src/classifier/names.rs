// file: src/classifier/names.rs
// description: vendor-specific malware family name extraction
// reference: AV vendor malware naming conventions

use crate::classifier::patterns::{
    KASPERSKY_ENGINE, KASPERSKY_VERDICT, MICROSOFT_ENGINE, MICROSOFT_VERDICT,
};
use regex::Regex;

/// Naming grammar of one AV engine: the regex that parses its verdicts and
/// the capture group holding the family name.
#[derive(Debug, Clone)]
pub struct VendorGrammar {
    pub engine: String,
    pub pattern: Regex,
    pub name_group: usize,
}

impl VendorGrammar {
    pub fn new(engine: impl Into<String>, pattern: Regex, name_group: usize) -> Self {
        Self {
            engine: engine.into(),
            pattern,
            name_group,
        }
    }

    pub fn extract(&self, raw_result: &str) -> Option<String> {
        self.pattern
            .captures(raw_result)
            .and_then(|caps| caps.get(self.name_group))
            .map(|name| name.as_str().to_lowercase())
            .filter(|name| !name.is_empty())
    }
}

pub struct NameExtractor {
    grammars: Vec<VendorGrammar>,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self::with_grammars(vec![
            VendorGrammar::new(MICROSOFT_ENGINE, MICROSOFT_VERDICT.clone(), 3),
            VendorGrammar::new(KASPERSKY_ENGINE, KASPERSKY_VERDICT.clone(), 5),
        ])
    }

    pub fn with_grammars(grammars: Vec<VendorGrammar>) -> Self {
        Self { grammars }
    }

    /// Engine identifiers are matched exactly, so `microsoft` has no grammar.
    pub fn grammar_for(&self, engine: &str) -> Option<&VendorGrammar> {
        self.grammars.iter().find(|grammar| grammar.engine == engine)
    }

    pub fn extract(&self, engine: &str, raw_result: &str) -> Option<String> {
        self.grammar_for(engine)?.extract(raw_result)
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microsoft_extraction() {
        let extractor = NameExtractor::new();

        assert_eq!(
            extractor.extract("Microsoft", "Trojan:Win32/Occamy.C"),
            Some("occamy".to_string())
        );
        assert_eq!(
            extractor.extract("Microsoft", "Trojan:Win32/Occamy"),
            Some("occamy".to_string())
        );
        assert_eq!(
            extractor.extract("Microsoft", "Trojan:Win32/Occamy!MTB"),
            Some("occamy".to_string())
        );
        assert_eq!(
            extractor.extract("Microsoft", "PUA:Win32/OpenCandy"),
            Some("opencandy".to_string())
        );
    }

    #[test]
    fn test_kaspersky_extraction() {
        let extractor = NameExtractor::new();

        assert_eq!(
            extractor.extract("Kaspersky", "Trojan.Win32.Occamy.gen"),
            Some("occamy".to_string())
        );
        assert_eq!(
            extractor.extract("Kaspersky", "HEUR:Trojan.Win32.Generic"),
            Some("generic".to_string())
        );
        assert_eq!(
            extractor.extract("Kaspersky", "not-a-virus:AdWare.Win32.OpenCandy.a"),
            Some("opencandy".to_string())
        );
    }

    #[test]
    fn test_unknown_engine_yields_nothing() {
        let extractor = NameExtractor::new();

        assert_eq!(extractor.extract("ESET-NOD32", "Trojan:Win32/Occamy.C"), None);
        assert_eq!(extractor.extract("microsoft", "Trojan:Win32/Occamy.C"), None);
        assert_eq!(extractor.extract("KASPERSKY", "Trojan.Win32.Occamy.gen"), None);
    }

    #[test]
    fn test_malformed_verdicts_degrade_to_none() {
        let extractor = NameExtractor::new();

        for raw in ["", "Occamy", "Trojan:Win32", "::::", "a.b"] {
            assert_eq!(extractor.extract("Microsoft", raw), None, "{raw:?}");
            assert_eq!(extractor.extract("Kaspersky", raw), None, "{raw:?}");
        }

        // the name group is optional in the Microsoft grammar
        assert_eq!(extractor.extract("Microsoft", "Trojan:Win32/!bit"), None);
        assert_eq!(extractor.extract("Microsoft", "Trojan:Win32/"), None);
    }

    #[test]
    fn test_custom_grammar_table() {
        let grammar = VendorGrammar::new(
            "ESET-NOD32",
            Regex::new(r"^(\w+)/(\w+)\.(\w+)").unwrap(),
            3,
        );
        let extractor = NameExtractor::with_grammars(vec![grammar]);

        assert_eq!(
            extractor.extract("ESET-NOD32", "Win32/Adware.Somoto.A"),
            Some("somoto".to_string())
        );
        assert_eq!(extractor.extract("Microsoft", "Trojan:Win32/Occamy.C"), None);
    }
}
