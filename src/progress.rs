// src/progress.rs
use crate::source::Source;

/// Lightweight progress reporting for a search across sources.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources to query.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A source returned `count` records.
    fn source_done(&mut self, _source: Source, _count: usize) {}

    /// A source failed and was degraded.
    fn source_failed(&mut self, _source: Source, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
