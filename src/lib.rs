// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use results::{ProductDetails, ProductRecord, RunSummary, SENTINEL};

use crawlers::{HttpFetcher, PageFetcher};
use std::path::{Path, PathBuf};

/// Builder for a single harvest run
///
/// Starts from [`ScrapeConfig::default`] (or a loaded configuration) and lets
/// callers override individual settings before running.
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    config: ScrapeConfig,
}

impl Harvest {
    /// Create a builder from an existing configuration
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a JSON file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(ScrapeConfig::from_file(path)?))
    }

    /// Set the listing page to start from
    pub fn with_collection_url(mut self, url: impl Into<String>) -> Self {
        self.config.collection_url = url.into();
        self
    }

    /// Set the origin prepended to relative product links
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set where the report is written
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the per-request timeout in seconds
    pub fn with_request_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.request_timeout_secs = timeout_seconds;
        self
    }

    /// Set the pause after each product page in milliseconds
    pub fn with_request_delay(mut self, delay_ms: u64) -> Self {
        self.config.request_delay_ms = delay_ms;
        self
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Validate the configuration and run over HTTP
    ///
    /// Errors only when the configuration is invalid or the HTTP client
    /// cannot be built. Failures during the run are logged and counted.
    pub async fn run(self) -> Result<RunSummary> {
        self.config.validate()?;
        let fetcher = HttpFetcher::with_timeout(self.config.request_timeout())?;
        Ok(self.run_with(&fetcher).await)
    }

    /// Run with a caller-supplied page source
    pub async fn run_with<F: PageFetcher>(self, fetcher: &F) -> RunSummary {
        pipeline::run(fetcher, &self.config).await
    }
}
