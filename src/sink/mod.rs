// file: src/sink/mod.rs
// description: fact sink interface and the sinks selectable from configuration
// reference: internal module structure

pub mod act;
pub mod json_lines;
pub mod memory;

pub use act::ActApiSink;
pub use json_lines::JsonLinesSink;
pub use memory::MemorySink;

use crate::config::ActConfig;
use crate::error::Result;
use crate::models::Fact;
use std::io::Stdout;
use tracing::info;

/// Destination for relationship facts. Facts are idempotent at the sink, so
/// emitting one twice is harmless.
#[allow(async_fn_in_trait)]
pub trait FactSink {
    async fn add(&mut self, fact: &Fact) -> Result<()>;
}

pub enum ConfiguredSink {
    Act(ActApiSink),
    Stdout(JsonLinesSink<Stdout>),
}

impl ConfiguredSink {
    /// Posts to the ACT API when a base URL is configured, otherwise prints
    /// one JSON fact per line on stdout.
    pub fn from_config(config: &ActConfig) -> Result<Self> {
        match config.baseurl {
            Some(_) => {
                let sink = ActApiSink::new(config)?;
                info!("Submitting facts to {}", sink.fact_url());
                Ok(ConfiguredSink::Act(sink))
            }
            None => {
                info!("No ACT base URL configured, writing facts to stdout");
                Ok(ConfiguredSink::Stdout(JsonLinesSink::stdout()))
            }
        }
    }
}

impl FactSink for ConfiguredSink {
    async fn add(&mut self, fact: &Fact) -> Result<()> {
        match self {
            ConfiguredSink::Act(sink) => sink.add(fact).await,
            ConfiguredSink::Stdout(sink) => sink.add(fact).await,
        }
    }
}
