// file: src/virustotal/mod.rs
// description: scanning service interface and VirusTotal implementation
// reference: internal module structure

pub mod client;

pub use client::VirusTotalClient;

use crate::error::Result;
use crate::models::ServiceResponse;

/// Anything that can answer report queries for the three indicator kinds.
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    async fn file_report(&self, hexdigest: &str) -> Result<ServiceResponse>;

    async fn ip_report(&self, ip: &str) -> Result<ServiceResponse>;

    async fn domain_report(&self, domain: &str) -> Result<ServiceResponse>;
}
