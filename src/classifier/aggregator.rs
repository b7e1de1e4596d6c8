// file: src/classifier/aggregator.rs
// description: combines extracted names, adware flags and the heuristic vote into labels
// reference: plurality voting over AV verdict heuristics

use crate::classifier::heuristics::HeuristicClassifier;
use crate::classifier::names::NameExtractor;
use crate::config::ClassifierConfig;
use crate::models::{DetectionRecord, FileReport};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

pub const ADWARE_LABEL: &str = "adware";

pub type LabelSet = BTreeSet<String>;

/// Votes per heuristic category for one indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicTally {
    counts: HashMap<String, usize>,
}

impl HeuristicTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: &str) {
        *self.counts.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Category with the highest count. Ties go to whichever comes first in
    /// `order`; categories missing from `order` never win.
    pub fn plurality_winner<'a>(&self, order: &'a [String]) -> Option<&'a str> {
        let mut winner: Option<(&'a str, usize)> = None;

        for category in order {
            let count = self.count(category);
            if count == 0 {
                continue;
            }
            match winner {
                Some((_, best)) if count <= best => {}
                _ => winner = Some((category.as_str(), count)),
            }
        }

        winner.map(|(category, _)| category)
    }
}

pub struct VerdictAggregator {
    extractor: NameExtractor,
    classifier: HeuristicClassifier,
}

impl VerdictAggregator {
    pub fn new(extractor: NameExtractor, classifier: HeuristicClassifier) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(NameExtractor::new(), HeuristicClassifier::from_config(config))
    }

    /// `None` when the report carries no scan results at all.
    pub fn aggregate_report(&self, report: &FileReport) -> Option<LabelSet> {
        report
            .detections()
            .map(|detections| self.aggregate(&detections))
    }

    pub fn aggregate<'a, I>(&self, records: I) -> LabelSet
    where
        I: IntoIterator<Item = &'a DetectionRecord>,
    {
        let mut labels = LabelSet::new();
        let mut tally = HeuristicTally::new();

        for record in records.into_iter().filter(|r| r.detected) {
            let verdict = record.verdict();

            if let Some(name) = self.extractor.extract(&record.engine, verdict) {
                debug!("{} names {:?} as {}", record.engine, verdict, name);
                labels.insert(name);
            }

            let signals = self.classifier.classify(verdict);
            if signals.adware_override {
                labels.insert(ADWARE_LABEL.to_string());
            }
            for category in &signals.categories {
                tally.increment(category);
            }
        }

        if let Some(winner) = tally.plurality_winner(self.classifier.heuristics()) {
            debug!("Heuristic vote won by {} ({} votes)", winner, tally.count(winner));
            labels.insert(winner.to_string());
        }

        labels
    }
}

impl Default for VerdictAggregator {
    fn default() -> Self {
        Self::new(NameExtractor::default(), HeuristicClassifier::default())
    }
}
