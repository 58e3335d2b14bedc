// src/record.rs

/// One normalized search hit. `link` is absolute, or empty for placeholders.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchRecord {
    pub title: String,
    pub link: String,
    pub details: Option<String>,
}

impl SearchRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self { title: title.into(), link: link.into(), details: None }
    }

    /// Empty snippets are dropped so formatters only check `Some`.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let d = details.into();
        self.details = (!d.is_empty()).then_some(d);
        self
    }

    /// Stand-in row shown when a source has nothing real to list.
    pub fn placeholder(source_label: &str, message: &str) -> Self {
        Self::new(source_label, s!()).with_details(message)
    }

    pub fn is_placeholder(&self) -> bool {
        self.link.is_empty()
    }
}
