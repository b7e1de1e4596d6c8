// file: src/models/fact.rs
// description: typed relationship facts and object references for the fact graph
// reference: ACT platform fact model

use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Hash,
    Ipv4,
    Ipv6,
    Fqdn,
    Tool,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Hash => "hash",
            NodeKind::Ipv4 => "ipv4",
            NodeKind::Ipv6 => "ipv6",
            NodeKind::Fqdn => "fqdn",
            NodeKind::Tool => "tool",
        }
    }

    /// `None` for anything that is not an IPv4 or IPv6 literal.
    pub fn for_address(address: &str) -> Option<Self> {
        match address.parse::<IpAddr>().ok()? {
            IpAddr::V4(_) => Some(NodeKind::Ipv4),
            IpAddr::V6(_) => Some(NodeKind::Ipv6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub kind: NodeKind,
    pub value: String,
}

impl Node {
    pub fn new(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn hash(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Hash, value)
    }

    pub fn fqdn(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Fqdn, value)
    }

    pub fn tool(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Tool, value)
    }

    pub fn address(value: &str) -> Option<Self> {
        NodeKind::for_address(value).map(|kind| Self::new(kind, value))
    }

    /// `type/value` reference used by the ACT API.
    pub fn act_reference(&self) -> String {
        format!("{}/{}", self.kind.as_str(), self.value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FactKind {
    IsTool,
    DnsRecord,
    Observation,
    UsesC2,
}

impl FactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactKind::IsTool => "isTool",
            FactKind::DnsRecord => "DNSRecord",
            FactKind::Observation => "observation",
            FactKind::UsesC2 => "usesC2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fact {
    pub kind: FactKind,
    pub value: Option<String>,
    pub source: Node,
    pub destination: Node,
}

impl Fact {
    pub fn new(kind: FactKind, value: Option<&str>, source: Node, destination: Node) -> Self {
        Self {
            kind,
            value: value.map(str::to_string),
            source,
            destination,
        }
    }

    pub fn payload(&self) -> FactPayload<'_> {
        FactPayload {
            fact_type: self.kind.as_str(),
            value: self.value.as_deref(),
            source_object: self.source.act_reference(),
            destination_object: self.destination.act_reference(),
            access_mode: "RoleBased",
            bidirectional_binding: false,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(ref value) => write!(
                f,
                "{}/{} {} -> {}",
                self.kind.as_str(),
                value,
                self.source,
                self.destination
            ),
            None => write!(
                f,
                "{} {} -> {}",
                self.kind.as_str(),
                self.source,
                self.destination
            ),
        }
    }
}

/// Wire form of a fact, shared by the ACT API and JSON line output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactPayload<'a> {
    #[serde(rename = "type")]
    pub fact_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    pub source_object: String,
    pub destination_object: String,
    pub access_mode: &'static str,
    pub bidirectional_binding: bool,
}
