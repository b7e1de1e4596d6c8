// file: src/utils/telemetry.rs
// description: timing of upstream VirusTotal queries

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Queries slower than this are reported at warn level.
pub const SLOW_QUERY: Duration = Duration::from_secs(10);

/// Times one report query against a VirusTotal endpoint.
pub struct QueryTimer {
    endpoint: String,
    indicator: String,
    threshold: Duration,
    start: Instant,
}

impl QueryTimer {
    pub fn start(endpoint: &str, indicator: &str) -> Self {
        Self::with_threshold(endpoint, indicator, SLOW_QUERY)
    }

    pub fn with_threshold(endpoint: &str, indicator: &str, threshold: Duration) -> Self {
        debug!(endpoint, indicator, "Querying VirusTotal");
        Self {
            endpoint: endpoint.to_string(),
            indicator: indicator.to_string(),
            threshold,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_slow(&self) -> bool {
        self.elapsed() > self.threshold
    }

    /// Logs the answered status and returns the query duration.
    pub fn finish(self, status: u16) -> Duration {
        let elapsed = self.elapsed();
        if elapsed > self.threshold {
            warn!(
                "Slow VirusTotal query: {} for {} answered {} after {:.2}s",
                self.endpoint,
                self.indicator,
                status,
                elapsed.as_secs_f64()
            );
        } else {
            debug!(
                "VirusTotal {} for {} answered {} in {:.2}s",
                self.endpoint,
                self.indicator,
                status,
                elapsed.as_secs_f64()
            );
        }
        elapsed
    }
}
