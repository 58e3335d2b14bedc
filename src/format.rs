// src/format.rs
//
// Markdown rendering of result lists.
//
//   ### <Source> Results:            (unpaged, numbering restarts at 1)
//   ### <Source> Results (Page N)    (paged, numbering continues across pages)
//
//   **<n>. <title>**
//   - Link: <link>
//   - Details: <details>             (only when present)

use crate::{pagination::PageCounts, record::SearchRecord};

pub const NO_RESULTS: &str = "No results found.";

pub fn format_results(records: &[SearchRecord], source_name: &str) -> String {
    let mut out = format!("### {source_name} Results:\n\n");
    if records.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
        return out;
    }
    push_entries(&mut out, records, 1);
    out
}

/// Records this page's size in `counts` and numbers from the running total.
/// An empty page renders only the no-results line.
pub fn format_paged_results(
    records: &[SearchRecord],
    source_name: &str,
    page: u32,
    counts: &mut PageCounts,
) -> String {
    let start = counts.record_and_start(page, records.len());
    if records.is_empty() {
        return s!(NO_RESULTS);
    }
    let mut out = format!("### {source_name} Results (Page {page})\n\n");
    push_entries(&mut out, records, start);
    out
}

/// `(number, record)` pairs starting at `start`.
pub fn numbered(records: &[SearchRecord], start: usize) -> impl Iterator<Item = (usize, &SearchRecord)> {
    records.iter().enumerate().map(move |(i, r)| (start + i, r))
}

fn push_entries(out: &mut String, records: &[SearchRecord], start: usize) {
    for (n, rec) in numbered(records, start) {
        push_entry(out, n, rec);
    }
}

fn push_entry(out: &mut String, n: usize, rec: &SearchRecord) {
    out.push_str(&format!("**{n}. {}**\n- Link: {}\n", rec.title, rec.link));
    if let Some(d) = rec.details.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("- Details: {d}\n"));
    }
    out.push('\n');
}
