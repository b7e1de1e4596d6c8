// file: src/virustotal/client.rs
// description: VirusTotal public API v2 client with scoped transport settings
// reference: https://developers.virustotal.com/v2.0/reference

use crate::config::VirusTotalConfig;
use crate::error::{EnrichError, Result};
use crate::models::ServiceResponse;
use crate::utils::QueryTimer;
use crate::virustotal::ReportSource;
use reqwest::{Client, Proxy};
use tracing::{debug, warn};

pub struct VirusTotalClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl VirusTotalClient {
    pub fn new(config: &VirusTotalConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_string();

        let mut builder = Client::builder()
            .user_agent(concat!("vt-enrichment/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if let Some(ref proxy) = config.proxy {
            let proxy = Proxy::all(proxy.as_str())
                .map_err(|e| EnrichError::Config(format!("Invalid proxy {}: {}", proxy, e)))?;
            builder = builder.proxy(proxy);
        }

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for VirusTotal queries");
        }

        let client = builder
            .build()
            .map_err(|e| EnrichError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, path: &str, param: &str, value: &str) -> Result<ServiceResponse> {
        let url = self.endpoint(path);
        let timer = QueryTimer::start(path, value);

        debug!("Querying {} for {}", url, value);

        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), (param, value)])
            .send()
            .await
            .map_err(|e| EnrichError::Upstream(format!("Failed to query {}: {}", path, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| EnrichError::Upstream(format!("Failed to read {} response: {}", path, e)))?;

        timer.finish(status);

        let service_response = ServiceResponse::from_http(status, &body);
        if let Some(ref error) = service_response.error {
            warn!("VirusTotal answered {} for {}: {}", status, value, error);
        }

        Ok(service_response)
    }
}

impl ReportSource for VirusTotalClient {
    async fn file_report(&self, hexdigest: &str) -> Result<ServiceResponse> {
        self.get("file/report", "resource", hexdigest).await
    }

    async fn ip_report(&self, ip: &str) -> Result<ServiceResponse> {
        self.get("ip-address/report", "ip", ip).await
    }

    async fn domain_report(&self, domain: &str) -> Result<ServiceResponse> {
        self.get("domain/report", "domain", domain).await
    }
}
