use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the harvest stages
///
/// `Network` and `Status` are the fetch failures, `Io` is a failed report
/// write. The pipeline catches both kinds at the stage boundary and logs them.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Request failed, timed out, or the client could not be built
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Writing the report failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration values
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    ConfigFile(#[from] std::io::Error),

    /// Configuration JSON could not be parsed
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// True for failures that happened while talking to the remote site
    pub fn is_network(&self) -> bool {
        matches!(self, ScrapeError::Network(_) | ScrapeError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
