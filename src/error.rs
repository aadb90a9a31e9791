use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinearError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("GraphQL errors: {}", messages.join(", "))]
    GraphQL { messages: Vec<String> },

    #[error("Empty response from API")]
    EmptyResponse,

    #[error("Unexpected response shape: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Page reported more results but no end cursor")]
    MissingCursor,

    #[error("Invalid issue at position {index}: {source}")]
    InvalidIssue {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode issue: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No access token found. Set LINEAR_ACCESS_TOKEN or add access_token to the config file"
    )]
    MissingAccessToken,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Failed to record integration run: {0}")]
    UsageReport(String),
}

pub type Result<T> = std::result::Result<T, LinearError>;
