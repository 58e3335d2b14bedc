// tests/common/mod.rs
//
// Canned `Fetcher` so session behaviour can be tested without the network.
#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap};

use legal_search::{
    error::SearchError,
    fetch::Fetcher,
    record::SearchRecord,
    source::Source,
};

pub enum Reply {
    Rows(usize),
    Fail,
}

#[derive(Default)]
pub struct Canned {
    replies: HashMap<(Source, u32), Reply>,
    pub calls: RefCell<Vec<(Source, String, u32)>>,
}

impl Canned {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, source: Source, page: u32, n: usize) -> Self {
        self.replies.insert((source, page), Reply::Rows(n));
        self
    }

    pub fn fail(mut self, source: Source, page: u32) -> Self {
        self.replies.insert((source, page), Reply::Fail);
        self
    }

    pub fn calls_for(&self, source: Source) -> Vec<u32> {
        self.calls.borrow().iter().filter(|(s, _, _)| *s == source).map(|(_, _, p)| *p).collect()
    }
}

impl Fetcher for Canned {
    fn fetch(&self, source: Source, keyword: &str, page: u32) -> Result<Vec<SearchRecord>, SearchError> {
        self.calls.borrow_mut().push((source, keyword.to_string(), page));
        match self.replies.get(&(source, page)) {
            Some(Reply::Rows(n)) => Ok((1..=*n)
                .map(|i| {
                    SearchRecord::new(
                        format!("{} p{page} r{i}", source.key()),
                        format!("https://example.org/{}/{page}/{i}", source.key()),
                    )
                })
                .collect()),
            Some(Reply::Fail) => Err(SearchError::Status {
                status: 503,
                url: format!("https://example.org/{}", source.key()),
            }),
            None => Ok(Vec::new()),
        }
    }
}
