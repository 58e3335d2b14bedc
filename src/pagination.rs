// src/pagination.rs
use std::collections::BTreeMap;

/// Results seen per page, for numbering that carries across pages.
///
/// Page 2 starts at `count(1) + 1`, page 3 at `count(1) + count(2) + 1`, and so
/// on. Pages that were never displayed count as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageCounts {
    counts: BTreeMap<u32, usize>,
}

impl PageCounts {
    pub fn record(&mut self, page: u32, n: usize) {
        self.counts.insert(page, n);
    }

    /// 1-based number of the first entry on `page`.
    pub fn start_for(&self, page: u32) -> usize {
        if page <= 1 {
            return 1;
        }
        self.counts.range(1..page).map(|(_, n)| *n).sum::<usize>() + 1
    }

    /// Record `page` and return its starting number.
    pub fn record_and_start(&mut self, page: u32, n: usize) -> usize {
        self.record(page, n);
        self.start_for(page)
    }

    pub fn get(&self, page: u32) -> Option<usize> {
        self.counts.get(&page).copied()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
