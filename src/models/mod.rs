// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod detection;
pub mod fact;
pub mod indicator;
pub mod report;

pub use detection::{DetectionRecord, ScanEntry};
pub use fact::{Fact, FactKind, FactPayload, Node, NodeKind};
pub use indicator::IndicatorMode;
pub use report::{FileReport, NetworkReport, Resolution, SampleRef, ServiceResponse};
