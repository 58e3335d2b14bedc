// src/fetch.rs
//
// The seam between the session and the network. The session only sees
// `Fetcher`; tests swap in canned results.

use reqwest::blocking::Client;

use crate::{
    config::settings::Settings,
    core::net,
    error::SearchError,
    record::SearchRecord,
    source::Source,
    specs,
};

pub trait Fetcher {
    /// One page of one source. `page` is 1-based and ignored by unpaged sources.
    fn fetch(&self, source: Source, keyword: &str, page: u32) -> Result<Vec<SearchRecord>, SearchError>;
}

/// Talks to the real sites (HTTP) and the configured WebDriver endpoint.
pub struct LiveFetcher {
    client: Client,
    settings: Settings,
}

impl LiveFetcher {
    pub fn new(settings: Settings) -> Result<Self, SearchError> {
        let client = net::build_client(&settings)?;
        Ok(Self { client, settings })
    }
}

impl Fetcher for LiveFetcher {
    fn fetch(&self, source: Source, keyword: &str, page: u32) -> Result<Vec<SearchRecord>, SearchError> {
        logf!("Fetch: {source} page={page} keyword={keyword:?}");
        if source.needs_browser() {
            logd!("Fetch: {source} via {:?} at {}", self.settings.browser, self.settings.webdriver_url);
        }
        match source {
            Source::IndianKanoon => specs::indian_kanoon::fetch(&self.client, keyword, page),
            Source::AustLii      => specs::austlii::fetch(&self.client, keyword),
            Source::CanLii       => specs::canlii::fetch(&self.settings, keyword),
            Source::Justia       => specs::justia::fetch(&self.settings, keyword, page),
        }
    }
}
