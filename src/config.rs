use crate::error::{Result, ScrapeError};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Settings shared by every stage of a harvest run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrapeConfig {
    /// Listing page enumerating the products
    #[serde(default = "default_collection_url")]
    pub collection_url: String,

    /// Origin prepended to the relative product links
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where the HTML report is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Heading and document title of the report
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Timeout for each HTTP request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Pause after every product page, in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_collection_url() -> String {
    "https://nickkuchar.com/collections/oahu".to_string()
}

fn default_base_url() -> String {
    "https://nickkuchar.com".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("nlp_analysis_data.html")
}

fn default_report_title() -> String {
    "Nick Kuchar - Oahu Collection Data for NLP".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_request_delay_ms() -> u64 {
    1000
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            collection_url: default_collection_url(),
            base_url: default_base_url(),
            output_path: default_output_path(),
            report_title: default_report_title(),
            request_timeout_secs: default_request_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Check that the URLs parse and the timeout is usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("collection_url", &self.collection_url),
            ("base_url", &self.base_url),
        ] {
            Url::parse(value)
                .map_err(|e| ScrapeError::Config(format!("{name} '{value}' is not a URL: {e}")))?;
        }

        if self.request_timeout_secs == 0 {
            return Err(ScrapeError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}
