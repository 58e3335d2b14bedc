// src/core/html.rs
//
// Small helpers over `scraper`'s parsed tree. Extraction specs stay declarative:
// pick elements with a selector, then read text/attributes through these.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;
use crate::error::SearchError;

pub fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Selector(format!("{css}: {e}")))
}

/// Visible text of an element, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Site-relative href → absolute URL on `origin`. Absolute hrefs pass through.
pub fn absolutize(href: &str, origin: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    if href.starts_with("//") {
        return join!("https:", href);
    }
    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        join!(origin, href)
    } else {
        join!(origin, "/", href)
    }
}

/// First following sibling element with tag `name`.
pub fn next_sibling_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name().eq_ignore_ascii_case(name))
}

/// First following sibling text node that is not blank, trimmed.
pub fn next_sibling_text(el: ElementRef<'_>) -> Option<String> {
    el.next_siblings()
        .filter_map(|n| n.value().as_text().map(|t| normalize_ws(t)))
        .find(|t| !t.is_empty())
}
