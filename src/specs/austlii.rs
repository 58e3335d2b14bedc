//! AustLII: static HTML results from the sino search CGI, no pagination.
//!
//! Hits are any anchors into `/cgi-bin/viewdoc/`. Some anchors are empty with
//! the visible title in the following text node. The snippet is the first
//! `p.meta` that follows the anchor anywhere later in the document.

use reqwest::blocking::Client;
use scraper::{ElementRef, Html};
use std::time::Duration;

use crate::{
    config::consts::{AUSTLII_DOC_PATH, AUSTLII_ORIGIN, AUSTLII_SEARCH, AUSTLII_TIMEOUT_SECS},
    core::{
        html::{absolutize, has_class, next_sibling_text, text_of},
        net,
        sanitize::encode_query,
    },
    error::SearchError,
    record::SearchRecord,
};

pub const LABEL: &str = "AustLII";
pub const NO_RESULTS: &str = "No results found on AustLII.";
pub const UNAVAILABLE: &str = "AustLII results are currently unavailable due to a connection error.";

pub fn search_url(keyword: &str) -> String {
    format!("{AUSTLII_SEARCH}?method=auto&query={}", encode_query(keyword))
}

pub fn fetch(client: &Client, keyword: &str) -> Result<Vec<SearchRecord>, SearchError> {
    let timeout = Duration::from_secs(AUSTLII_TIMEOUT_SECS);
    let doc = net::http_get(client, &search_url(keyword), Some(timeout))?.require_success()?;
    Ok(parse(&doc.body))
}

/// What the list shows when the fetch itself failed.
pub fn unavailable() -> Vec<SearchRecord> {
    vec![SearchRecord::placeholder(LABEL, UNAVAILABLE)]
}

/// Never empty: no hits yields the "no results" placeholder.
pub fn parse(html: &str) -> Vec<SearchRecord> {
    let doc = Html::parse_document(html);

    let mut out: Vec<SearchRecord> = Vec::new();
    // Records still looking for their `p.meta`
    let mut waiting: Vec<usize> = Vec::new();

    for el in doc.root_element().descendants().filter_map(ElementRef::wrap) {
        match el.value().name() {
            "a" => {
                let Some(href) = el.value().attr("href") else { continue };
                if !href.contains(AUSTLII_DOC_PATH) { continue; }

                let mut title = text_of(el);
                if title.is_empty() {
                    title = next_sibling_text(el).unwrap_or_default();
                }
                out.push(SearchRecord::new(title, absolutize(href, AUSTLII_ORIGIN)));
                waiting.push(out.len() - 1);
            }
            "p" if has_class(el, "meta") => {
                if waiting.is_empty() { continue; }
                let meta = text_of(el);
                for ix in waiting.drain(..) {
                    out[ix].details = (!meta.is_empty()).then(|| meta.clone());
                }
            }
            _ => {}
        }
    }

    if out.is_empty() {
        out.push(SearchRecord::placeholder(LABEL, NO_RESULTS));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <ol>
            <li>
              <a href="/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html">Mabo v Queensland (No 2)</a>
              <p class="meta">High Court of Australia, 3 June 1992</p>
            </li>
            <li>
              <a href="https://www.austlii.edu.au/cgi-bin/viewdoc/au/legis/cth/consol_act/caca2010265/"></a>
                 Competition and Consumer Act 2010
              <span class="score">88%</span>
            </li>
            <li><a href="/au/other/">Not a document</a></li>
            <li>
              <a href="/cgi-bin/viewdoc/au/cases/nsw/NSWSC/2001/5.html">Smith v Jones</a>
            </li>
          </ol>
          <p class="meta">Later metadata</p>
        </body></html>"#;

    #[test]
    fn url_uses_auto_method() {
        assert_eq!(
            search_url("native title"),
            "https://www.austlii.edu.au/cgi-bin/sinosrch.cgi?method=auto&query=native+title"
        );
    }

    #[test]
    fn extracts_viewdoc_links_only() {
        let rows = parse(PAGE);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].link, "https://www.austlii.edu.au/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html");
        assert_eq!(rows[0].title, "Mabo v Queensland (No 2)");
        assert_eq!(rows[0].details.as_deref(), Some("High Court of Australia, 3 June 1992"));
    }

    #[test]
    fn empty_anchor_takes_following_text() {
        let rows = parse(PAGE);
        assert_eq!(rows[1].title, "Competition and Consumer Act 2010");
    }

    #[test]
    fn meta_is_next_in_document_order() {
        // Both the 2nd and 4th hit see the trailing p.meta as their next one.
        let rows = parse(PAGE);
        assert_eq!(rows[1].details.as_deref(), Some("Later metadata"));
        assert_eq!(rows[2].details.as_deref(), Some("Later metadata"));
    }

    #[test]
    fn no_hits_gives_placeholder() {
        let rows = parse("<html><body>Sorry, no documents.</body></html>");
        assert_eq!(rows, vec![SearchRecord::placeholder(LABEL, NO_RESULTS)]);
        assert!(rows[0].is_placeholder());
    }

    #[test]
    fn unavailable_placeholder() {
        let rows = unavailable();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "AustLII");
        assert_eq!(rows[0].details.as_deref(), Some(UNAVAILABLE));
    }
}
