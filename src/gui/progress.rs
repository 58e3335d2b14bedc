// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::{progress::Progress, source::Source};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Searching {total} source(s)…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn source_done(&mut self, source: Source, count: usize) {
        self.done += 1;
        self.set_status(format!("{source}: {count} result(s) ({}/{})", self.done, self.total));
    }
    fn source_failed(&mut self, source: Source, _error: &str) {
        self.done += 1;
        self.failed += 1;
        self.set_status(format!("{source} failed ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("No sources selected");
        } else if self.failed > 0 {
            self.set_status(format!("Search complete ({} of {} source(s) failed)", self.failed, self.total));
        } else {
            self.set_status(format!("Search complete ({}/{})", self.done, self.total));
        }
    }
}
