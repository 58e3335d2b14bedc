// src/core/net.rs
//
// Blocking HTTP GET. One client per app; requests run on the caller's thread.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::{config::settings::Settings, error::SearchError};

/// A fetched document. Status is kept so callers decide what "failure" means.
pub struct Fetched {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl Fetched {
    #[inline]
    pub fn is_ok(&self) -> bool { self.status == 200 }

    /// Non-2xx → `SearchError::Status`.
    pub fn require_success(self) -> Result<Self, SearchError> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(SearchError::Status { status: self.status, url: self.url })
        }
    }
}

pub fn build_client(settings: &Settings) -> Result<Client, SearchError> {
    let client = Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(settings.http_timeout())
        .build()?;
    Ok(client)
}

/// GET `url`; `timeout` overrides the client default for this request only.
pub fn http_get(client: &Client, url: &str, timeout: Option<Duration>) -> Result<Fetched, SearchError> {
    logd!("GET {url}");
    let mut req = client.get(url);
    if let Some(t) = timeout {
        req = req.timeout(t);
    }
    let resp = req.send()?;
    let status = resp.status().as_u16();
    let body = resp.text()?;
    logd!("GET {url} → {status} ({} bytes)", body.len());
    Ok(Fetched { url: s!(url), status, body })
}
