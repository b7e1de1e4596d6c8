// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sink;
pub mod utils;
pub mod virustotal;

pub use classifier::{
    HeuristicClassifier, HeuristicMatch, HeuristicTally, LabelSet, NameExtractor, VendorGrammar,
    VerdictAggregator,
};
pub use config::{ActConfig, ClassifierConfig, Config, LoggingConfig, VirusTotalConfig};
pub use error::{EnrichError, Result};
pub use models::{
    DetectionRecord, Fact, FactKind, FileReport, IndicatorMode, NetworkReport, Node, NodeKind,
    ServiceResponse,
};
pub use pipeline::Enricher;
pub use sink::{ActApiSink, ConfiguredSink, FactSink, JsonLinesSink, MemorySink};
pub use utils::{QueryTimer, Validator};
pub use virustotal::{ReportSource, VirusTotalClient};
