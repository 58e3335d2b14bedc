// src/error.rs
use thiserror::Error;

/// Anything that can go wrong while querying a single source.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("browser automation failed: {0}")]
    WebDriver(#[from] WebDriverError),

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("settings: {0}")]
    Settings(String),

    #[error("keyword is empty")]
    EmptyKeyword,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from the WebDriver wire protocol.
#[derive(Debug, Error)]
pub enum WebDriverError {
    #[error("driver unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{error}: {message}")]
    Command { error: String, message: String },

    #[error("timed out after {secs}s waiting for `{what}`")]
    Timeout { what: String, secs: u64 },

    #[error("malformed driver reply: {0}")]
    Protocol(String),
}

impl WebDriverError {
    /// W3C `no such element`; polling waits treat it as "not yet".
    pub fn is_no_such_element(&self) -> bool {
        matches!(self, WebDriverError::Command { error, .. } if error == "no such element")
    }

    /// The element was detached from the DOM after it was found.
    pub fn is_stale_element(&self) -> bool {
        matches!(self, WebDriverError::Command { error, .. } if error == "stale element reference")
    }
}
