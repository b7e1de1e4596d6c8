// file: src/pipeline/mod.rs
// description: indicator handlers that query, classify and emit facts
// reference: fetch, classify, emit workflow shared by hash, IP and domain lookups

pub mod emitter;

use crate::classifier::VerdictAggregator;
use crate::error::{EnrichError, Result};
use crate::models::{Fact, FileReport, IndicatorMode, NetworkReport, Node, ServiceResponse};
use crate::sink::FactSink;
use crate::utils::Validator;
use crate::virustotal::ReportSource;
use serde_json::Value;
use tracing::{debug, info, warn};

pub struct Enricher<S, K> {
    source: S,
    sink: K,
    aggregator: VerdictAggregator,
}

impl<S: ReportSource, K: FactSink> Enricher<S, K> {
    pub fn new(source: S, sink: K, aggregator: VerdictAggregator) -> Self {
        Self {
            source,
            sink,
            aggregator,
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Enriches one indicator and returns how many facts were emitted.
    pub async fn run(&mut self, mode: IndicatorMode, input: &str) -> Result<usize> {
        let indicator = Validator::validate_indicator(input)?;
        info!("Enriching {} {}", mode, indicator);

        match mode {
            IndicatorMode::Hexdigest => self.handle_hexdigest(indicator).await,
            IndicatorMode::Ip => self.handle_ip(indicator).await,
            IndicatorMode::Domain => self.handle_domain(indicator).await,
        }
    }

    pub async fn handle_hexdigest(&mut self, hexdigest: &str) -> Result<usize> {
        if !Validator::is_hexdigest(hexdigest) {
            warn!("{} does not look like an MD5, SHA-1 or SHA-256 digest", hexdigest);
        }

        let response = self.source.file_report(hexdigest).await?;
        let results = require_results(&response, IndicatorMode::Hexdigest, hexdigest)?;
        let report = FileReport::from_results(results)?;

        let Some(labels) = self.aggregator.aggregate_report(&report) else {
            info!("VirusTotal has no scan results for {}", hexdigest);
            return Ok(0);
        };

        if let (Some(positives), Some(total)) = (report.positives, report.total) {
            info!("{}: {}/{} engines detected", hexdigest, positives, total);
        }
        if let Some(ref permalink) = report.permalink {
            debug!("Report permalink: {}", permalink);
        }

        self.emit(emitter::tool_facts(hexdigest, &labels)).await
    }

    pub async fn handle_ip(&mut self, ip: &str) -> Result<usize> {
        let Some(indicator) = Node::address(ip) else {
            warn!("{} is not a valid IP address, skipping lookup", ip);
            return Ok(0);
        };

        let response = self.source.ip_report(ip).await?;
        let results = require_results(&response, IndicatorMode::Ip, ip)?;
        let report = NetworkReport::from_results(results)?;

        self.emit(emitter::network_facts(&indicator, &report)).await
    }

    pub async fn handle_domain(&mut self, domain: &str) -> Result<usize> {
        let response = self.source.domain_report(domain).await?;
        let results = require_results(&response, IndicatorMode::Domain, domain)?;
        let report = NetworkReport::from_results(results)?;

        self.emit(emitter::network_facts(&Node::fqdn(domain), &report))
            .await
    }

    async fn emit(&mut self, facts: Vec<Fact>) -> Result<usize> {
        for fact in &facts {
            debug!("Emitting {}", fact);
            self.sink.add(fact).await?;
        }
        Ok(facts.len())
    }
}

fn require_results<'a>(
    response: &'a ServiceResponse,
    mode: IndicatorMode,
    indicator: &str,
) -> Result<&'a Value> {
    response
        .results
        .as_ref()
        .ok_or_else(|| EnrichError::UnexpectedResponse {
            handler: mode.handler_name(),
            indicator: indicator.to_string(),
            response: response.to_raw(),
        })
}
