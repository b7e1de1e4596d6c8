// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring and log file

use crate::error::{EnrichError, Result};
use colored::*;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn level_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    if level.is_empty() {
        return EnvFilter::new("info");
    }
    EnvFilter::try_new(level.to_lowercase()).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs go to stderr unless a log file is given; stdout is left for fact output.
pub fn init_logger(level: &str, log_file: Option<&Path>, colored_output: bool) -> Result<()> {
    let filter = level_filter(level);

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    EnrichError::Config(format!("Cannot open log file {}: {}", path.display(), e))
                })?;

            let layer = fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact()
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(true)
                .with_line_number(true)
                .compact()
                .with_ansi(colored_output)
                .with_writer(std::io::stderr);
            (None, Some(layer))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| EnrichError::Config(format!("Logger already initialized: {}", e)))
}

/// Final status line for a run that emitted `count` facts for `indicator`.
pub fn format_fact_summary(mode: &str, indicator: &str, count: usize) -> String {
    match count {
        0 => format!(
            "{} {} {}: no facts emitted",
            "⚠".yellow().bold(),
            mode.yellow(),
            indicator
        ),
        1 => format!("{} {} {}: 1 fact", "✓".green().bold(), mode.green(), indicator),
        n => format!(
            "{} {} {}: {} facts",
            "✓".green().bold(),
            mode.green(),
            indicator,
            n
        ),
    }
}

pub fn format_failure(mode: &str, indicator: &str) -> String {
    format!(
        "{} {} {}: enrichment failed",
        "✗".red().bold(),
        mode.red(),
        indicator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug").to_string(), "debug");
        assert_eq!(level_filter("WARN").to_string(), "warn");
        assert_eq!(level_filter("  ").to_string(), "info");
    }

    #[test]
    fn test_status_lines() {
        colored::control::set_override(false);
        assert_eq!(format_fact_summary("ip", "8.8.8.8", 3), "✓ ip 8.8.8.8: 3 facts");
        assert_eq!(format_fact_summary("ip", "8.8.8.8", 1), "✓ ip 8.8.8.8: 1 fact");
        assert_eq!(
            format_fact_summary("domain", "example.org", 0),
            "⚠ domain example.org: no facts emitted"
        );
        assert_eq!(
            format_failure("hexdigest", "abc"),
            "✗ hexdigest abc: enrichment failed"
        );
    }
}
