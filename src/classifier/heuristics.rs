// file: src/classifier/heuristics.rs
// description: keyword heuristics and adware overrides over raw AV verdicts
// reference: configurable substring-based classification

use crate::classifier::patterns::{ADWARE_OVERRIDES, AV_HEURISTICS};
use crate::config::ClassifierConfig;

/// Signals found in a single verdict string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicMatch {
    /// Matched categories in vocabulary order, each listed once.
    pub categories: Vec<String>,
    pub adware_override: bool,
}

pub struct HeuristicClassifier {
    heuristics: Vec<String>,
    adware_overrides: Vec<String>,
}

impl HeuristicClassifier {
    pub fn new(heuristics: Vec<String>, adware_overrides: Vec<String>) -> Self {
        Self {
            heuristics: heuristics.into_iter().map(|t| t.to_lowercase()).collect(),
            adware_overrides: adware_overrides
                .into_iter()
                .map(|t| t.to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.heuristics.clone(), config.adware_overrides.clone())
    }

    pub fn heuristics(&self) -> &[String] {
        &self.heuristics
    }

    /// Adware products override whatever the heuristic vote decides.
    pub fn is_adware(&self, raw_result: &str) -> bool {
        let text = raw_result.to_lowercase();
        self.adware_overrides.iter().any(|term| text.contains(term))
    }

    pub fn classify(&self, raw_result: &str) -> HeuristicMatch {
        let text = raw_result.to_lowercase();

        let categories = self
            .heuristics
            .iter()
            .filter(|term| text.contains(term.as_str()))
            .cloned()
            .collect();

        HeuristicMatch {
            categories,
            adware_override: self.is_adware(&text),
        }
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new(
            AV_HEURISTICS.iter().map(|s| s.to_string()).collect(),
            ADWARE_OVERRIDES.iter().map(|s| s.to_string()).collect(),
        )
    }
}
