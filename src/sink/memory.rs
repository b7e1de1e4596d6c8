// file: src/sink/memory.rs
// description: in-memory fact sink

use crate::error::Result;
use crate::models::Fact;
use crate::sink::FactSink;

#[derive(Debug, Default)]
pub struct MemorySink {
    facts: Vec<Fact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }
}

impl FactSink for MemorySink {
    async fn add(&mut self, fact: &Fact) -> Result<()> {
        self.facts.push(fact.clone());
        Ok(())
    }
}
