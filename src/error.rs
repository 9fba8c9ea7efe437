// src/error.rs
use thiserror::Error;

/// Everything that can stop a fetch. Malformed anchors are not errors;
/// they are skipped during extraction.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid CSS selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
