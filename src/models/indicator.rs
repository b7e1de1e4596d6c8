// file: src/models/indicator.rs
// description: kinds of indicator the worker can be asked to enrich
// reference: stix ioc standards

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorMode {
    Hexdigest,
    Ip,
    Domain,
}

impl IndicatorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorMode::Hexdigest => "hexdigest",
            IndicatorMode::Ip => "ip",
            IndicatorMode::Domain => "domain",
        }
    }

    pub fn handler_name(&self) -> &'static str {
        match self {
            IndicatorMode::Hexdigest => "handle_hexdigest",
            IndicatorMode::Ip => "handle_ip",
            IndicatorMode::Domain => "handle_domain",
        }
    }
}

impl fmt::Display for IndicatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
