// file: src/classifier/mod.rs
// description: verdict normalization module exports
// reference: internal module structure

pub mod aggregator;
pub mod heuristics;
pub mod names;
pub mod patterns;

pub use aggregator::{HeuristicTally, LabelSet, VerdictAggregator};
pub use heuristics::{HeuristicClassifier, HeuristicMatch};
pub use names::{NameExtractor, VendorGrammar};
