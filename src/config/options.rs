// src/config/options.rs
use crate::{config::settings::Settings, source::EnabledSources};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub settings: Settings,
}

impl AppOptions {
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            search: SearchOptions { keyword: s!(), sources: settings.sources },
            settings,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Text field contents; only committed to the session on Search.
    pub keyword: String,
    pub sources: EnabledSources,
}

impl SearchOptions {
    /// Trimmed keyword, or None if there is nothing to search for.
    pub fn query(&self) -> Option<&str> {
        let k = self.keyword.trim();
        (!k.is_empty()).then_some(k)
    }
}
