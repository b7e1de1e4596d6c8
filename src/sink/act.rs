// file: src/sink/act.rs
// description: submits facts to the ACT platform REST API
// reference: https://github.com/mnemonic-no/act-platform

use crate::config::ActConfig;
use crate::error::{EnrichError, Result};
use crate::models::Fact;
use crate::sink::FactSink;
use reqwest::Client;
use tracing::debug;

pub struct ActApiSink {
    client: Client,
    baseurl: String,
    user_id: String,
}

impl ActApiSink {
    pub fn new(config: &ActConfig) -> Result<Self> {
        let baseurl = config
            .baseurl
            .as_deref()
            .ok_or_else(|| EnrichError::Config("act.baseurl is not configured".to_string()))?;
        let user_id = config
            .user_id
            .as_deref()
            .ok_or_else(|| EnrichError::Config("act.user_id is not configured".to_string()))?;

        let client = Client::builder()
            .user_agent(format!("{}/{}", config.worker_name, env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EnrichError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            baseurl: baseurl.trim_end_matches('/').to_string(),
            user_id: user_id.to_string(),
        })
    }

    pub fn fact_url(&self) -> String {
        format!("{}/v1/fact", self.baseurl)
    }
}

impl FactSink for ActApiSink {
    async fn add(&mut self, fact: &Fact) -> Result<()> {
        debug!("Submitting fact {}", fact);

        let response = self
            .client
            .post(self.fact_url())
            .header("ACT-User-ID", &self.user_id)
            .json(&fact.payload())
            .send()
            .await
            .map_err(|e| EnrichError::Sink(format!("Failed to submit {}: {}", fact, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EnrichError::Sink(format!(
                "ACT API rejected {} with status {}: {}",
                fact, status, error_text
            )));
        }

        Ok(())
    }
}
