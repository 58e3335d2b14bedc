// src/source.rs
//
// The four search engines and how each one pages its results.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    IndianKanoon,
    AustLii,
    CanLii,
    Justia,
}

/// How a source splits results across pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pagination {
    /// `pagenum=<page-1>`, omitted on page 1 (Indian Kanoon)
    PageNumber,
    /// `start=<(page-1)*size>` (Justia)
    Offset,
    /// Single result page
    None,
}

impl Source {
    /// Query and display order.
    pub const ALL: [Source; 4] = [
        Source::IndianKanoon,
        Source::AustLii,
        Source::CanLii,
        Source::Justia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Source::IndianKanoon => "Indian Kanoon",
            Source::AustLii      => "AustLII",
            Source::CanLii       => "CanLII",
            Source::Justia       => "Justia",
        }
    }

    /// Short name used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Source::IndianKanoon => "ik",
            Source::AustLii      => "austlii",
            Source::CanLii       => "canlii",
            Source::Justia       => "justia",
        }
    }

    pub fn from_key(s: &str) -> Option<Source> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ik" | "indiankanoon" | "indian-kanoon" | "kanoon" => Some(Source::IndianKanoon),
            "austlii" | "al"                                   => Some(Source::AustLii),
            "canlii" | "cl"                                    => Some(Source::CanLii),
            "justia"                                           => Some(Source::Justia),
            _ => None,
        }
    }

    pub fn pagination(self) -> Pagination {
        match self {
            Source::IndianKanoon => Pagination::PageNumber,
            Source::Justia       => Pagination::Offset,
            Source::AustLii | Source::CanLii => Pagination::None,
        }
    }

    #[inline]
    pub fn is_paged(self) -> bool {
        self.pagination() != Pagination::None
    }

    /// Needs a browser session rather than a plain GET.
    #[inline]
    pub fn needs_browser(self) -> bool {
        matches!(self, Source::CanLii | Source::Justia)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Source::IndianKanoon => 0,
            Source::AustLii      => 1,
            Source::CanLii       => 2,
            Source::Justia       => 3,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which sources a search should query (the dashboard checkboxes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledSources {
    pub indian_kanoon: bool,
    pub austlii: bool,
    pub canlii: bool,
    pub justia: bool,
}

impl Default for EnabledSources {
    fn default() -> Self {
        Self { indian_kanoon: true, austlii: true, canlii: true, justia: true }
    }
}

impl EnabledSources {
    pub fn none() -> Self {
        Self { indian_kanoon: false, austlii: false, canlii: false, justia: false }
    }

    pub fn only(sources: &[Source]) -> Self {
        let mut out = Self::none();
        for s in sources {
            out.set(*s, true);
        }
        out
    }

    pub fn get(&self, source: Source) -> bool {
        match source {
            Source::IndianKanoon => self.indian_kanoon,
            Source::AustLii      => self.austlii,
            Source::CanLii       => self.canlii,
            Source::Justia       => self.justia,
        }
    }

    pub fn get_mut(&mut self, source: Source) -> &mut bool {
        match source {
            Source::IndianKanoon => &mut self.indian_kanoon,
            Source::AustLii      => &mut self.austlii,
            Source::CanLii       => &mut self.canlii,
            Source::Justia       => &mut self.justia,
        }
    }

    pub fn set(&mut self, source: Source, on: bool) {
        *self.get_mut(source) = on;
    }

    pub fn iter(&self) -> impl Iterator<Item = Source> {
        let me = *self;
        Source::ALL.into_iter().filter(move |s| me.get(*s))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_and_aliases() {
        for s in Source::ALL {
            assert_eq!(Source::from_key(s.key()), Some(s));
        }
        assert_eq!(Source::from_key(" Kanoon "), Some(Source::IndianKanoon));
        assert_eq!(Source::from_key("westlaw"), None);
    }

    #[test]
    fn only_paged_sources_paginate() {
        let paged: Vec<_> = Source::ALL.into_iter().filter(|s| s.is_paged()).collect();
        assert_eq!(paged, vec![Source::IndianKanoon, Source::Justia]);
    }

    #[test]
    fn js_rendered_sources_need_a_browser() {
        let driven: Vec<_> = Source::ALL.into_iter().filter(|s| s.needs_browser()).collect();
        assert_eq!(driven, vec![Source::CanLii, Source::Justia]);
    }

    #[test]
    fn enabled_iter_keeps_display_order() {
        let e = EnabledSources::only(&[Source::Justia, Source::IndianKanoon]);
        assert_eq!(e.iter().collect::<Vec<_>>(), vec![Source::IndianKanoon, Source::Justia]);
        assert_eq!(e.count(), 2);
    }
}
