// file: src/pipeline/emitter.rs
// description: turns labels and network report sections into relationship facts
// reference: ACT platform fact types used by the VirusTotal worker

use crate::classifier::LabelSet;
use crate::models::{Fact, FactKind, NetworkReport, Node, NodeKind};
use tracing::debug;

pub fn tool_facts(hexdigest: &str, labels: &LabelSet) -> Vec<Fact> {
    labels
        .iter()
        .map(|label| {
            Fact::new(
                FactKind::IsTool,
                Some("vt"),
                Node::hash(hexdigest),
                Node::tool(label.as_str()),
            )
        })
        .collect()
}

/// `None` when `address` is not an IPv4 or IPv6 literal.
pub fn resolution_fact(hostname: &str, address: &str) -> Option<Fact> {
    let destination = Node::address(address)?;
    Some(Fact::new(
        FactKind::DnsRecord,
        Some("A"),
        Node::fqdn(hostname),
        destination,
    ))
}

pub fn downloaded_sample_fact(sha256: &str, indicator: &Node) -> Fact {
    Fact::new(
        FactKind::Observation,
        None,
        Node::hash(sha256),
        indicator.clone(),
    )
}

pub fn communicating_sample_fact(sha256: &str, indicator: &Node) -> Fact {
    Fact::new(
        FactKind::UsesC2,
        Some(indicator.kind.as_str()),
        Node::hash(sha256),
        indicator.clone(),
    )
}

/// Facts for an IP (`ipv4`/`ipv6` node) or domain (`fqdn` node) report.
pub fn network_facts(indicator: &Node, report: &NetworkReport) -> Vec<Fact> {
    let mut facts = Vec::new();

    for resolution in &report.resolutions {
        let fact = match indicator.kind {
            NodeKind::Fqdn => resolution
                .ip_address
                .as_deref()
                .and_then(|ip| resolution_fact(&indicator.value, ip)),
            NodeKind::Ipv4 | NodeKind::Ipv6 => resolution
                .hostname
                .as_deref()
                .and_then(|hostname| resolution_fact(hostname, &indicator.value)),
            NodeKind::Hash | NodeKind::Tool => None,
        };

        match fact {
            Some(fact) => facts.push(fact),
            None => debug!("Skipping resolution {:?} for {}", resolution, indicator),
        }
    }

    for sample in &report.detected_downloaded_samples {
        facts.push(downloaded_sample_fact(&sample.sha256, indicator));
    }

    for sample in &report.detected_communicating_samples {
        facts.push(communicating_sample_fact(&sample.sha256, indicator));
    }

    facts
}
