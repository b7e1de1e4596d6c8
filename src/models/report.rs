// file: src/models/report.rs
// description: scanning service response envelope and report payloads
// reference: https://developers.virustotal.com/v2.0/reference

use crate::error::Result;
use crate::models::detection::{DetectionRecord, ScanEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// What a query to the scanning service came back with. `results` is only
/// present for a successfully decoded response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub response_code: u16,
}

impl ServiceResponse {
    pub fn ok(results: Value) -> Self {
        Self {
            results: Some(results),
            error: None,
            response_code: 200,
        }
    }

    pub fn from_http(status: u16, body: &str) -> Self {
        let mut response = Self {
            results: None,
            error: None,
            response_code: status,
        };

        match status {
            200 => match serde_json::from_str(body) {
                Ok(results) => response.results = Some(results),
                Err(e) => response.error = Some(format!("Could not decode JSON response: {}", e)),
            },
            204 => {
                response.error = Some(
                    "You exceeded the public API request rate limit (4 requests of any nature per minute)"
                        .to_string(),
                )
            }
            403 => {
                response.error = Some(
                    "You tried to perform calls to functions for which you require a Private API key."
                        .to_string(),
                )
            }
            404 => response.error = Some("Requested item is not available".to_string()),
            _ => {}
        }

        response
    }

    pub fn to_raw(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileReport {
    /// Absent when the service has never seen the file.
    #[serde(default)]
    pub scans: Option<BTreeMap<String, ScanEntry>>,
    #[serde(default)]
    pub positives: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub scan_date: Option<String>,
}

impl FileReport {
    pub fn from_results(results: &Value) -> Result<Self> {
        Ok(Self::deserialize(results)?)
    }

    pub fn detections(&self) -> Option<Vec<DetectionRecord>> {
        self.scans.as_ref().map(|scans| {
            scans
                .iter()
                .map(|(engine, entry)| DetectionRecord::from_scan(engine, entry))
                .collect()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Resolution {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub last_resolved: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SampleRef {
    pub sha256: String,
    #[serde(default)]
    pub positives: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub date: Option<String>,
}

/// IP address and domain reports share this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkReport {
    #[serde(default)]
    pub resolutions: Vec<Resolution>,
    #[serde(default)]
    pub detected_downloaded_samples: Vec<SampleRef>,
    #[serde(default)]
    pub detected_communicating_samples: Vec<SampleRef>,
}

impl NetworkReport {
    pub fn from_results(results: &Value) -> Result<Self> {
        Ok(Self::deserialize(results)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        let ok = ServiceResponse::from_http(200, r#"{"response_code": 1}"#);
        assert_eq!(ok.results, Some(json!({"response_code": 1})));
        assert_eq!(ok.error, None);

        let garbage = ServiceResponse::from_http(200, "<html>");
        assert_eq!(garbage.results, None);
        assert!(garbage.error.is_some());

        let limited = ServiceResponse::from_http(204, "");
        assert_eq!(limited.results, None);
        assert!(limited.error.unwrap().contains("rate limit"));

        assert!(ServiceResponse::from_http(403, "").error.is_some());
        assert!(ServiceResponse::from_http(404, "").error.is_some());

        let other = ServiceResponse::from_http(500, "boom");
        assert_eq!(other.results, None);
        assert_eq!(other.error, None);
        assert_eq!(other.response_code, 500);
    }

    #[test]
    fn test_raw_rendering() {
        let response = ServiceResponse::from_http(404, "");
        assert_eq!(
            response.to_raw(),
            r#"{"error":"Requested item is not available","response_code":404}"#
        );
    }

    #[test]
    fn test_unknown_file_has_no_scans() {
        let report = FileReport::from_results(&json!({
            "response_code": 0,
            "verbose_msg": "The requested resource is not among the finished, queued or pending scans"
        }))
        .unwrap();

        assert!(report.scans.is_none());
        assert!(report.detections().is_none());
    }

    #[test]
    fn test_file_report_detections() {
        let report = FileReport::from_results(&json!({
            "positives": 1,
            "total": 2,
            "scans": {
                "Microsoft": {"detected": true, "result": "Trojan:Win32/Occamy.C"},
                "Avast": {"detected": false, "result": null}
            }
        }))
        .unwrap();

        let detections = report.detections().unwrap();
        assert_eq!(detections.len(), 2);
        assert_eq!(
            detections,
            vec![
                DetectionRecord::new("Avast", false, None),
                DetectionRecord::detected("Microsoft", "Trojan:Win32/Occamy.C"),
            ]
        );
    }

    #[test]
    fn test_network_report_defaults() {
        let report = NetworkReport::from_results(&json!({
            "resolutions": [{"hostname": "dns.google", "last_resolved": "2019-01-01 00:00:00"}]
        }))
        .unwrap();

        assert_eq!(report.resolutions.len(), 1);
        assert_eq!(report.resolutions[0].hostname.as_deref(), Some("dns.google"));
        assert!(report.detected_downloaded_samples.is_empty());
        assert!(report.detected_communicating_samples.is_empty());
    }

    #[test]
    fn test_sample_without_hash_is_rejected() {
        let result = NetworkReport::from_results(&json!({
            "detected_communicating_samples": [{"positives": 3}]
        }));
        assert!(result.is_err());
    }
}
