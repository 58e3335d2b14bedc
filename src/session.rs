// src/session.rs
//
// One user's search: the committed keyword, and per source the current page,
// the last results, the inline error (if any) and the page counts used for
// continuous numbering.
//
// Every entry point is synchronous and runs one fetch per affected source.
// A failing source never aborts the others; it degrades and keeps its message.

use crate::{
    fetch::Fetcher,
    format::{format_paged_results, format_results},
    pagination::PageCounts,
    progress::Progress,
    record::SearchRecord,
    source::{EnabledSources, Source},
    specs,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceState {
    /// 1-based; stays 1 for unpaged sources
    pub page: u32,
    pub records: Vec<SearchRecord>,
    pub error: Option<String>,
    pub counts: PageCounts,
}

impl Default for SourceState {
    fn default() -> Self {
        Self { page: 1, records: Vec::new(), error: None, counts: PageCounts::default() }
    }
}

/// What a frontend needs to draw one source's list.
pub struct SourceView<'a> {
    pub source: Source,
    /// Number of the first record
    pub start: usize,
    pub records: &'a [SearchRecord],
    pub error: Option<&'a str>,
    /// `Some` for paged sources
    pub page: Option<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct SearchSession {
    keyword: String,
    results_fetched: bool,
    sources: [SourceState; 4],
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(&self) -> &str { &self.keyword }

    pub fn results_fetched(&self) -> bool { self.results_fetched }

    pub fn state(&self, source: Source) -> &SourceState {
        &self.sources[source.index()]
    }

    pub fn page(&self, source: Source) -> u32 {
        self.state(source).page
    }

    /// New search: every enabled source is fetched from page 1, disabled ones
    /// are cleared, and all page counts reset.
    pub fn search(
        &mut self,
        fetcher: &dyn Fetcher,
        keyword: &str,
        enabled: &EnabledSources,
        mut progress: Option<&mut dyn Progress>,
    ) {
        self.keyword = s!(keyword);
        logf!("Search: begin keyword={keyword:?} sources={}", enabled.count());

        if let Some(p) = progress.as_deref_mut() {
            p.begin(enabled.count());
        }

        for source in Source::ALL {
            let st = &mut self.sources[source.index()];
            st.page = 1;
            if !enabled.get(source) {
                st.records.clear();
                st.error = None;
                continue;
            }
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Searching {source}…"));
            }
            match self.load(fetcher, source) {
                Ok(n) => {
                    if let Some(p) = progress.as_deref_mut() { p.source_done(source, n); }
                }
                Err(msg) => {
                    if let Some(p) = progress.as_deref_mut() { p.source_failed(source, &msg); }
                }
            }
        }

        self.results_fetched = true;
        for st in self.sources.iter_mut() {
            st.counts.clear();
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        logf!("Search: done keyword={keyword:?}");
    }

    /// Paged sources only. Returns whether a fetch happened.
    pub fn next_page(&mut self, fetcher: &dyn Fetcher, source: Source) -> bool {
        if !self.results_fetched || !source.is_paged() {
            return false;
        }
        self.sources[source.index()].page += 1;
        logf!("Paging: {source} → page {}", self.page(source));
        let _ = self.load(fetcher, source);
        true
    }

    /// Paged sources only, and only past page 1. Returns whether a fetch happened.
    pub fn prev_page(&mut self, fetcher: &dyn Fetcher, source: Source) -> bool {
        if !self.results_fetched || !source.is_paged() || self.page(source) <= 1 {
            return false;
        }
        self.sources[source.index()].page -= 1;
        logf!("Paging: {source} → page {}", self.page(source));
        let _ = self.load(fetcher, source);
        true
    }

    /// Fetch the source's current page into its state. On failure the source
    /// degrades and the message is kept for display.
    fn load(&mut self, fetcher: &dyn Fetcher, source: Source) -> Result<usize, String> {
        let page = self.page(source);
        let result = fetcher.fetch(source, &self.keyword, page);
        let st = &mut self.sources[source.index()];

        match result {
            Ok(records) => {
                logf!("Search: {source} page {page} → {} result(s)", records.len());
                st.records = records;
                st.error = None;
                Ok(st.records.len())
            }
            Err(e) => {
                let msg = format!("Error fetching {} results: {e}", source.label());
                loge!("{msg}");
                st.records = degraded(source);
                st.error = Some(msg.clone());
                Err(msg)
            }
        }
    }

    /// Markdown block for one source. Paged sources record their page size.
    pub fn render(&mut self, source: Source) -> String {
        let st = &mut self.sources[source.index()];
        if source.is_paged() {
            format_paged_results(&st.records, source.label(), st.page, &mut st.counts)
        } else {
            format_results(&st.records, source.label())
        }
    }

    /// All enabled sources, errors quoted above their block, `---` between blocks.
    pub fn render_all(&mut self, enabled: &EnabledSources) -> String {
        let blocks: Vec<String> = enabled
            .iter()
            .map(|source| {
                let body = self.render(source);
                match &self.state(source).error {
                    Some(err) => format!("> {err}\n\n{body}"),
                    None => body,
                }
            })
            .collect();
        blocks.join("\n---\n\n")
    }

    /// Same numbering as `render`, for frontends that draw widgets.
    pub fn view(&mut self, source: Source) -> SourceView<'_> {
        let st = &mut self.sources[source.index()];
        let (start, page) = if source.is_paged() {
            (st.counts.record_and_start(st.page, st.records.len()), Some(st.page))
        } else {
            (1, None)
        };
        SourceView {
            source,
            start,
            records: &st.records,
            error: st.error.as_deref(),
            page,
        }
    }
}

/// What a failed source shows instead of results.
fn degraded(source: Source) -> Vec<SearchRecord> {
    match source {
        Source::AustLii => specs::austlii::unavailable(),
        _ => Vec::new(),
    }
}
