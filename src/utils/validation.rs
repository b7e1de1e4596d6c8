// file: src/utils/validation.rs
// description: indicator and configuration validation helpers
// reference: input validation patterns

use crate::error::{EnrichError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;

lazy_static! {
    // MD5, SHA-1 or SHA-256
    static ref HEXDIGEST: Regex = Regex::new(
        r"^(?:[a-fA-F0-9]{32}|[a-fA-F0-9]{40}|[a-fA-F0-9]{64})$"
    ).expect("HEXDIGEST regex is valid");
}

pub struct Validator;

impl Validator {
    /// Trims the raw input and rejects it when nothing is left.
    pub fn validate_indicator(raw: &str) -> Result<&str> {
        let indicator = raw.trim();
        if indicator.is_empty() {
            return Err(EnrichError::Validation(
                "No indicator found on stdin".to_string(),
            ));
        }
        Ok(indicator)
    }

    pub fn is_hexdigest(value: &str) -> bool {
        HEXDIGEST.is_match(value)
    }

    /// Base URLs of the VirusTotal and ACT APIs must be absolute http(s)
    /// URLs with a host.
    pub fn validate_url(url: &str) -> Result<()> {
        let parsed = Url::parse(url)
            .map_err(|e| EnrichError::Validation(format!("{} is not a URL: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(EnrichError::Validation(format!(
                "{} must use http or https",
                url
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(EnrichError::Validation(format!("{} has no host", url)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_indicator() {
        assert_eq!(Validator::validate_indicator("  8.8.8.8\n").unwrap(), "8.8.8.8");
        assert!(Validator::validate_indicator("").is_err());
        assert!(Validator::validate_indicator(" \n\t").is_err());
    }

    #[test]
    fn test_hexdigest_detection() {
        assert!(Validator::is_hexdigest("44d88612fea8a8f36de82e1278abb02f"));
        assert!(Validator::is_hexdigest("3395856CE81F2B7382DEE72602F798B642F14140"));
        assert!(Validator::is_hexdigest(
            "275a021bbfb6489e54d471899f7db9d1663fc695ec2fe2a2c4538aabf651fd0f"
        ));
        assert!(!Validator::is_hexdigest("44d88612fea8a8f36de82e1278abb02"));
        assert!(!Validator::is_hexdigest("not-a-hash"));
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://www.virustotal.com/vtapi/v2").is_ok());
        assert!(Validator::validate_url("http://act.local:8888").is_ok());
        assert!(Validator::validate_url("act.local").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
        assert!(Validator::validate_url("http://").is_err());
    }
}
