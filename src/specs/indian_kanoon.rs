//! Indian Kanoon: static HTML results, page-number pagination.
//!
//! - Page 1 has no `pagenum`; page N uses `pagenum=N-1`.
//! - Each hit is a `div.result_title` holding the document link; the snippet is
//!   the next sibling `div`.

use reqwest::blocking::Client;
use scraper::Html;

use crate::{
    config::consts::{IK_ORIGIN, IK_SEARCH},
    core::{
        html::{absolutize, next_sibling_named, selector, text_of},
        net::{self, Fetched},
        sanitize::encode_query,
    },
    error::SearchError,
    record::SearchRecord,
};

pub fn search_url(keyword: &str, page: u32) -> String {
    let q = encode_query(keyword);
    if page <= 1 {
        format!("{IK_SEARCH}?formInput={q}")
    } else {
        format!("{IK_SEARCH}?formInput={q}&pagenum={}", page - 1)
    }
}

pub fn fetch(client: &Client, keyword: &str, page: u32) -> Result<Vec<SearchRecord>, SearchError> {
    let doc = net::http_get(client, &search_url(keyword, page), None)?;
    from_reply(&doc)
}

/// A non-200 reply is "no results", not an error.
pub fn from_reply(doc: &Fetched) -> Result<Vec<SearchRecord>, SearchError> {
    if !doc.is_ok() {
        logd!("Indian Kanoon: HTTP {} from {}, treating as empty", doc.status, doc.url);
        return Ok(Vec::new());
    }
    parse(&doc.body)
}

pub fn parse(html: &str) -> Result<Vec<SearchRecord>, SearchError> {
    let doc = Html::parse_document(html);
    let results = selector("div.result_title")?;
    let anchor = selector("a[href]")?;

    let mut out = Vec::new();
    for result in doc.select(&results) {
        let Some(a) = result.select(&anchor).next() else { continue };
        let href = a.value().attr("href").unwrap_or_default();
        let details = next_sibling_named(result, "div").map(text_of).unwrap_or_default();

        out.push(
            SearchRecord::new(text_of(a), absolutize(href, IK_ORIGIN))
                .with_details(details),
        );
    }
    Ok(out)
}
