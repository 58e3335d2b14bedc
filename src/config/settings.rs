// src/config/settings.rs
//
// User settings: which browser driver to talk to and how to reach the sites.
// Layering: defaults → `.store/settings.json` → env → CLI flags (caller).

use std::{fs, path::{Path, PathBuf}, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    config::consts::*,
    error::SearchError,
    source::EnabledSources,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Edge,
    Chrome,
    Firefox,
}

impl Browser {
    pub fn parse(s: &str) -> Option<Browser> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edge" | "msedge" | "microsoftedge" => Some(Browser::Edge),
            "chrome" | "chromium"               => Some(Browser::Chrome),
            "firefox" | "gecko"                 => Some(Browser::Firefox),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub browser: Browser,
    pub webdriver_url: String,
    pub headless: bool,
    pub user_agent: String,
    pub http_timeout_secs: u64,
    pub sources: EnabledSources,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            browser: Browser::Edge,
            webdriver_url: s!(DEFAULT_WEBDRIVER_URL),
            headless: true,
            user_agent: s!(DEFAULT_USER_AGENT),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            sources: EnabledSources::default(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        Path::new(STORE_DIR).join(SETTINGS_FILE)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Missing file → defaults. A present but broken file is an error.
    pub fn load_from(path: &Path) -> Result<Settings, SearchError> {
        if !path.exists() {
            logd!("Settings: {} missing, using defaults", path.display());
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| SearchError::Settings(format!("{}: {e}", path.display())))
    }

    /// Defaults + file + environment.
    pub fn load() -> Result<Settings, SearchError> {
        let mut settings = Settings::load_from(&Settings::default_path())?;
        settings.apply_env(|k| std::env::var(k).ok());
        Ok(settings)
    }

    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_WEBDRIVER_URL).filter(|v| !v.trim().is_empty()) {
            self.webdriver_url = url.trim().to_string();
        }
        if let Some(b) = lookup(ENV_BROWSER) {
            match Browser::parse(&b) {
                Some(browser) => self.browser = browser,
                None => loge!("Settings: ignoring unknown browser {b:?}"),
            }
        }
        if let Some(h) = lookup(ENV_HEADLESS) {
            self.headless = !matches!(h.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
    }
}
