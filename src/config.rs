// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::classifier::patterns::{ADWARE_OVERRIDES, AV_HEURISTICS};
use crate::error::{EnrichError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_VT_BASE_URL: &str = "https://www.virustotal.com/vtapi/v2";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub virustotal: VirusTotalConfig,
    pub act: ActConfig,
    pub logging: LoggingConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VirusTotalConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub proxy: Option<String>,
    /// The public API is queried without certificate verification unless
    /// this is switched off.
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ActConfig {
    pub baseurl: Option<String>,
    pub user_id: Option<String>,
    pub worker_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Declaration order is the plurality tie-break.
    pub heuristics: Vec<String>,
    pub adware_overrides: Vec<String>,
}

impl Default for VirusTotalConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_VT_BASE_URL.to_string(),
            proxy: None,
            accept_invalid_certs: true,
        }
    }
}

impl Default for ActConfig {
    fn default() -> Self {
        Self {
            baseurl: None,
            user_id: None,
            worker_name: "vt-enrichment".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            heuristics: AV_HEURISTICS.iter().map(|s| s.to_string()).collect(),
            adware_overrides: ADWARE_OVERRIDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl VirusTotalConfig {
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(EnrichError::Config(
                "VirusTotal API key is not configured".to_string(),
            )),
        }
    }
}

impl Config {
    /// Reads the file and environment layers. Call `validate` once the
    /// command-line overrides have been applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("VT_ENRICHMENT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| EnrichError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| EnrichError::Config(e.to_string()))
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.virustotal.base_url)
            .map_err(|e| EnrichError::Config(format!("virustotal.base_url: {}", e)))?;

        if let Some(ref baseurl) = self.act.baseurl {
            Validator::validate_url(baseurl)
                .map_err(|e| EnrichError::Config(format!("act.baseurl: {}", e)))?;

            if self.act.user_id.as_deref().is_none_or(|id| id.trim().is_empty()) {
                return Err(EnrichError::Config(
                    "act.user_id is required when act.baseurl is set".to_string(),
                ));
            }
        }

        if self.classifier.heuristics.is_empty() {
            return Err(EnrichError::Config(
                "classifier.heuristics must not be empty".to_string(),
            ));
        }

        let terms = self
            .classifier
            .heuristics
            .iter()
            .chain(self.classifier.adware_overrides.iter());
        for term in terms {
            if term.trim().is_empty() {
                return Err(EnrichError::Config(
                    "classifier vocabularies must not contain empty terms".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.virustotal.base_url, DEFAULT_VT_BASE_URL);
        assert!(config.virustotal.accept_invalid_certs);
        assert_eq!(config.classifier.heuristics.first().map(String::as_str), Some("trojan"));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("worker.toml");
        fs::write(
            &path,
            r#"
[virustotal]
api_key = "abc123"
proxy = "http://proxy.local:3128"

[act]
baseurl = "https://act.example.org"
user_id = "3"

[classifier]
adware_overrides = ["installcore"]
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.virustotal.api_key().unwrap(), "abc123");
        assert_eq!(config.virustotal.proxy.as_deref(), Some("http://proxy.local:3128"));
        assert_eq!(config.act.user_id.as_deref(), Some("3"));
        assert_eq!(config.classifier.adware_overrides, vec!["installcore".to_string()]);
        // untouched sections keep their defaults
        assert_eq!(config.classifier.heuristics.len(), AV_HEURISTICS.len());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_user_id_can_be_supplied_after_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("worker.toml");
        fs::write(&path, "[act]\nbaseurl = \"https://act.example.org\"\n").unwrap();

        let mut config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.act.baseurl.as_deref(), Some("https://act.example.org"));
        assert!(config.validate().is_err());

        config.act.user_id = Some("1".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_act_baseurl_requires_user_id() {
        let mut config = Config::default_config();
        config.act.baseurl = Some("https://act.example.org".to_string());
        assert!(config.validate().is_err());

        config.act.user_id = Some("1".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_urls_and_empty_terms() {
        let mut config = Config::default_config();
        config.virustotal.base_url = "www.virustotal.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.classifier.adware_overrides.push("  ".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.classifier.heuristics.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = VirusTotalConfig::default();
        assert!(config.api_key().is_err());

        config.api_key = Some("   ".to_string());
        assert!(config.api_key().is_err());
    }
}
