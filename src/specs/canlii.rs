//! CanLII: the search form is a JavaScript app, so it is driven through a
//! browser session: open the home page, fill `#textInput`, press the search
//! button, wait for result links, then read the rendered DOM.

use std::time::Duration;

use scraper::Html;
use serde_json::json;

use crate::{
    config::{
        consts::{CANLII_HOME, CANLII_INPUT_WAIT_SECS, CANLII_ORIGIN, CANLII_RESULTS_WAIT_SECS},
        settings::Settings,
    },
    core::{
        html::{absolutize, selector, text_of},
        webdriver::Session,
    },
    error::{SearchError, WebDriverError},
    record::SearchRecord,
};

pub const SEARCH_INPUT: &str = "#textInput";
pub const SEARCH_BUTTON: &str = "button[aria-label='Start a search']";
pub const RESULT_LINK: &str = "a[data-result-uuid]";

const HIDE_COOKIE_BLOCKER: &str = "\
    var b = document.getElementById('cookieConsentBlocker'); \
    if (b) { b.style.display = 'none'; }";
const SET_VALUE: &str = "arguments[0].value = arguments[1];";

pub fn fetch(settings: &Settings, keyword: &str) -> Result<Vec<SearchRecord>, SearchError> {
    let html = render_results(settings, keyword)?;
    parse(&html)
}

/// Early returns close the browser through `Session`'s drop.
fn render_results(settings: &Settings, keyword: &str) -> Result<String, WebDriverError> {
    let session = Session::start(settings)?;
    session.goto(CANLII_HOME)?;
    session.execute(HIDE_COOKIE_BLOCKER, Vec::new())?;

    let input = session.wait_for(SEARCH_INPUT, Duration::from_secs(CANLII_INPUT_WAIT_SECS))?;
    session.execute(SET_VALUE, vec![input.to_json(), json!(keyword)])?;

    let button = session.wait_for_clickable(SEARCH_BUTTON, Duration::from_secs(CANLII_INPUT_WAIT_SECS))?;
    session.click(&button)?;

    session.wait_for(RESULT_LINK, Duration::from_secs(CANLII_RESULTS_WAIT_SECS))?;
    let html = session.page_source()?;
    if let Err(e) = session.quit() {
        loge!("CanLII: browser session did not close cleanly: {e}");
    }
    Ok(html)
}

pub fn parse(html: &str) -> Result<Vec<SearchRecord>, SearchError> {
    let doc = Html::parse_document(html);
    let links = selector(RESULT_LINK)?;

    let out = doc
        .select(&links)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            Some(SearchRecord::new(text_of(a), absolutize(href, CANLII_ORIGIN)))
        })
        .collect();
    Ok(out)
}
