//! Error types for each step of a run.

use std::path::PathBuf;
use thiserror::Error;

/// Reading or parsing `config.json` failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Log file setup failed. Nothing else can run without a log, so these end the process.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no home directory could be determined")]
    NoHomeDir,

    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create log file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetching the public IP failed.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request to IP service failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read IP service response: {0}")]
    Body(#[source] reqwest::Error),
}

/// The endpoint template does not hold exactly one zone placeholder.
#[derive(Debug, Error)]
#[error("api_endpoint must contain exactly one %s placeholder, found {found} in {template:?}")]
pub struct EndpointError {
    pub template: String,
    pub found: usize,
}

/// Locating a record id failed.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error("request for DNS records failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read DNS records response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("DNS records response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("failed to parse DNS records: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("DNS records response has no result (errors: {errors:?})")]
    MissingResult { errors: Vec<serde_json::Value> },

    #[error("DNS record not found: {domain} ({record_type})")]
    NotFound { domain: String, record_type: String },
}

impl LookupError {
    /// True when the provider answered but no record matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Updating a record failed.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error("failed to serialize DNS record update: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("request to update DNS record failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to update DNS record, status code: {status}")]
    Status { status: u16 },
}

/// The step that aborted a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("{domain}: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: LookupError,
    },

    #[error("{domain}: {source}")]
    Update {
        domain: String,
        #[source]
        source: UpdateError,
    },
}
