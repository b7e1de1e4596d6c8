// file: src/sink/json_lines.rs
// description: writes facts as newline-delimited JSON

use crate::error::Result;
use crate::models::Fact;
use crate::sink::FactSink;
use std::io::{Stdout, Write};

pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> FactSink for JsonLinesSink<W> {
    async fn add(&mut self, fact: &Fact) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &fact.payload())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FactKind, Node};

    #[test]
    fn test_one_line_per_fact() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let facts = [
            Fact::new(FactKind::IsTool, Some("vt"), Node::hash("abc"), Node::tool("occamy")),
            Fact::new(FactKind::Observation, None, Node::hash("def"), Node::fqdn("example.org")),
        ];

        tokio_test::block_on(async {
            for fact in &facts {
                sink.add(fact).await.unwrap();
            }
        });

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"type":"isTool","value":"vt","sourceObject":"hash/abc","destinationObject":"tool/occamy","accessMode":"RoleBased","bidirectionalBinding":false}"#
        );
        assert!(lines[1].starts_with(r#"{"type":"observation","sourceObject":"hash/def""#));
    }
}
