// tests/session_flow.rs
//
// Search → render → page through, against a canned fetcher.

mod common;

use common::Canned;
use legal_search::{
    progress::Progress,
    session::SearchSession,
    source::{EnabledSources, Source::{self, *}},
    specs::austlii,
};

fn all_sources() -> Canned {
    Canned::new()
        .rows(IndianKanoon, 1, 9)
        .rows(IndianKanoon, 2, 8)
        .rows(AustLii, 1, 3)
        .rows(CanLii, 1, 4)
        .rows(Justia, 1, 10)
        .rows(Justia, 2, 10)
}

#[test]
fn every_enabled_source_starts_at_one() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "contract law", &EnabledSources::default(), None);

    assert!(s.results_fetched());
    assert_eq!(s.keyword(), "contract law");
    for source in Source::ALL {
        let md = s.render(source);
        assert!(md.contains("**1. "), "{source} should number from 1:\n{md}");
    }
    assert!(s.render(IndianKanoon).starts_with("### Indian Kanoon Results (Page 1)"));
    assert!(s.render(CanLii).starts_with("### CanLII Results:"));
}

#[test]
fn numbering_continues_on_page_two() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "contract law", &EnabledSources::only(&[IndianKanoon]), None);

    let p1 = s.render(IndianKanoon);
    assert!(p1.contains("**1. ik p1 r1**"));
    assert!(p1.contains("**9. ik p1 r9**"));

    assert!(s.next_page(&f, IndianKanoon));
    assert_eq!(s.page(IndianKanoon), 2);

    let p2 = s.render(IndianKanoon);
    assert!(p2.starts_with("### Indian Kanoon Results (Page 2)"));
    assert!(p2.contains("**10. ik p2 r1**"));
    assert!(p2.contains("**17. ik p2 r8**"));
    assert!(!p2.contains("**18."));
    assert_eq!(f.calls_for(IndianKanoon), vec![1, 2]);
}

#[test]
fn going_back_restarts_at_one() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::only(&[Justia]), None);
    s.render(Justia);
    s.next_page(&f, Justia);
    assert!(s.render(Justia).contains("**11. "));

    assert!(s.prev_page(&f, Justia));
    let md = s.render(Justia);
    assert!(md.contains("(Page 1)"));
    assert!(md.contains("**1. justia p1 r1**"));
    assert_eq!(f.calls_for(Justia), vec![1, 2, 1]);
}

#[test]
fn prev_on_first_page_does_nothing() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::default(), None);
    assert!(!s.prev_page(&f, IndianKanoon));
    assert_eq!(f.calls_for(IndianKanoon), vec![1]);
}

#[test]
fn unpaged_sources_ignore_paging() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::default(), None);
    assert!(!s.next_page(&f, AustLii));
    assert!(!s.next_page(&f, CanLii));
    assert_eq!(s.page(CanLii), 1);
    assert_eq!(f.calls_for(CanLii), vec![1]);
}

#[test]
fn paging_before_search_is_ignored() {
    let f = all_sources();
    let mut s = SearchSession::new();
    assert!(!s.next_page(&f, IndianKanoon));
    assert!(f.calls.borrow().is_empty());
}

#[test]
fn disabled_source_is_empty_not_an_error() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::only(&[IndianKanoon]), None);

    assert!(f.calls_for(CanLii).is_empty());
    assert!(s.state(CanLii).records.is_empty());
    assert_eq!(s.state(CanLii).error, None);
    assert_eq!(s.render(CanLii), "### CanLII Results:\n\nNo results found.\n");
    assert_eq!(s.render(Justia), "No results found.");
}

#[test]
fn one_failure_does_not_stop_the_others() {
    let f = all_sources().fail(CanLii, 1);
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::default(), None);

    let canlii = s.state(CanLii);
    assert!(canlii.records.is_empty());
    let err = canlii.error.as_deref().unwrap();
    assert!(err.starts_with("Error fetching CanLII results:"), "{err}");

    assert_eq!(s.state(IndianKanoon).records.len(), 9);
    assert_eq!(s.state(AustLii).records.len(), 3);
    assert_eq!(s.state(Justia).records.len(), 10);
}

#[test]
fn austlii_failure_shows_placeholder() {
    let f = all_sources().fail(AustLii, 1);
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::only(&[AustLii]), None);

    assert_eq!(s.state(AustLii).records, austlii::unavailable());
    let md = s.render(AustLii);
    assert!(md.contains("**1. AustLII**"));
    assert!(md.contains(austlii::UNAVAILABLE));
}

#[test]
fn failed_page_clears_old_rows_and_recovers() {
    let f = all_sources().fail(IndianKanoon, 3);
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::only(&[IndianKanoon]), None);
    s.next_page(&f, IndianKanoon);
    s.next_page(&f, IndianKanoon);

    assert_eq!(s.page(IndianKanoon), 3);
    assert!(s.state(IndianKanoon).records.is_empty());
    assert!(s.state(IndianKanoon).error.is_some());

    s.prev_page(&f, IndianKanoon);
    assert_eq!(s.state(IndianKanoon).records.len(), 8);
    assert_eq!(s.state(IndianKanoon).error, None);
}

#[test]
fn new_search_resets_pages_and_counts() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::only(&[IndianKanoon]), None);
    s.render(IndianKanoon);
    s.next_page(&f, IndianKanoon);
    s.render(IndianKanoon);

    s.search(&f, "negligence", &EnabledSources::only(&[IndianKanoon]), None);
    assert_eq!(s.page(IndianKanoon), 1);
    assert!(s.state(IndianKanoon).counts.is_empty());
    assert!(s.render(IndianKanoon).contains("**1. ik p1 r1**"));

    let last = f.calls.borrow().last().cloned().unwrap();
    assert_eq!(last, (IndianKanoon, "negligence".to_string(), 1));
}

#[test]
fn render_all_quotes_errors_and_separates_blocks() {
    let f = all_sources().fail(Justia, 1);
    let mut s = SearchSession::new();
    let enabled = EnabledSources::only(&[AustLii, Justia]);
    s.search(&f, "tort", &enabled, None);

    let md = s.render_all(&enabled);
    let blocks: Vec<&str> = md.split("\n---\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("### AustLII Results:"));
    assert!(blocks[1].starts_with("> Error fetching Justia results:"));
    assert!(blocks[1].ends_with("No results found."));
}

#[test]
fn view_matches_markdown_numbering() {
    let f = all_sources();
    let mut s = SearchSession::new();
    s.search(&f, "tort", &EnabledSources::only(&[IndianKanoon]), None);
    assert_eq!(s.view(IndianKanoon).start, 1);
    s.next_page(&f, IndianKanoon);

    let v = s.view(IndianKanoon);
    assert_eq!(v.start, 10);
    assert_eq!(v.page, Some(2));
    assert_eq!(v.records.len(), 8);
    assert!(v.error.is_none());
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.events.push(format!("begin {total}")); }
    fn source_done(&mut self, source: Source, count: usize) { self.events.push(format!("done {} {count}", source.key())); }
    fn source_failed(&mut self, source: Source, _error: &str) { self.events.push(format!("fail {}", source.key())); }
    fn finish(&mut self) { self.events.push("finish".into()); }
}

#[test]
fn progress_sees_each_enabled_source() {
    let f = all_sources().fail(AustLii, 1);
    let mut s = SearchSession::new();
    let mut rec = Recorder::default();
    s.search(&f, "tort", &EnabledSources::only(&[IndianKanoon, AustLii]), Some(&mut rec));

    assert_eq!(rec.events, vec!["begin 2", "done ik 9", "fail austlii", "finish"]);
}
