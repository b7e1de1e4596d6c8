// file: src/models/detection.rs
// description: per-engine antivirus verdicts for a single indicator
// reference: VirusTotal v2 file report scans section

use serde::{Deserialize, Serialize};

/// One engine's entry in the `scans` map of a file report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEntry {
    #[serde(default)]
    pub detected: bool,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub update: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRecord {
    pub engine: String,
    pub detected: bool,
    pub raw_result: Option<String>,
}

impl DetectionRecord {
    pub fn new(engine: impl Into<String>, detected: bool, raw_result: Option<String>) -> Self {
        Self {
            engine: engine.into(),
            detected,
            raw_result,
        }
    }

    pub fn detected(engine: impl Into<String>, raw_result: impl Into<String>) -> Self {
        Self::new(engine, true, Some(raw_result.into()))
    }

    pub fn from_scan(engine: &str, entry: &ScanEntry) -> Self {
        Self::new(engine, entry.detected, entry.result.clone())
    }

    /// Verdict text, empty when the engine reported none.
    pub fn verdict(&self) -> &str {
        self.raw_result.as_deref().unwrap_or("")
    }
}
