//! Justia: results come from an embedded Google custom search that renders in
//! the browser. Offset pagination, 10 results per page.

use std::time::Duration;

use scraper::Html;

use crate::{
    config::{
        consts::{JUSTIA_CX, JUSTIA_PAGE_SIZE, JUSTIA_SEARCH, JUSTIA_WAIT_SECS},
        settings::Settings,
    },
    core::{
        html::{selector, text_of},
        sanitize::encode_query,
        webdriver::Session,
    },
    error::{SearchError, WebDriverError},
    record::SearchRecord,
};

pub const RESULT_BLOCK: &str = ".gsc-webResult";
pub const RESULT_TITLE: &str = "div.gsc-webResult a.gs-title";

pub fn search_url(keyword: &str, page: u32) -> String {
    let start = page.saturating_sub(1) * JUSTIA_PAGE_SIZE;
    format!("{JUSTIA_SEARCH}?q={}&cx={JUSTIA_CX}&start={start}", encode_query(keyword))
}

pub fn fetch(settings: &Settings, keyword: &str, page: u32) -> Result<Vec<SearchRecord>, SearchError> {
    let html = render_results(settings, &search_url(keyword, page))?;
    parse(&html)
}

fn render_results(settings: &Settings, url: &str) -> Result<String, WebDriverError> {
    let session = Session::start(settings)?;
    session.goto(url)?;
    session.wait_for(RESULT_BLOCK, Duration::from_secs(JUSTIA_WAIT_SECS))?;
    let html = session.page_source()?;
    if let Err(e) = session.quit() {
        loge!("Justia: browser session did not close cleanly: {e}");
    }
    Ok(html)
}

pub fn parse(html: &str) -> Result<Vec<SearchRecord>, SearchError> {
    let doc = Html::parse_document(html);
    let titles = selector(RESULT_TITLE)?;

    let out = doc
        .select(&titles)
        .map(|a| SearchRecord::new(text_of(a), a.value().attr("href").unwrap_or_default()))
        .collect();
    Ok(out)
}
