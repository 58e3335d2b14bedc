// src/config/consts.rs

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "settings.json";

// Net config
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// Indian Kanoon
pub const IK_ORIGIN: &str = "https://indiankanoon.org";
pub const IK_SEARCH: &str = "https://indiankanoon.org/search/";

// AustLII
pub const AUSTLII_ORIGIN: &str = "https://www.austlii.edu.au";
pub const AUSTLII_SEARCH: &str = "https://www.austlii.edu.au/cgi-bin/sinosrch.cgi";
pub const AUSTLII_TIMEOUT_SECS: u64 = 20;
pub const AUSTLII_DOC_PATH: &str = "/cgi-bin/viewdoc/";

// CanLII
pub const CANLII_ORIGIN: &str = "https://www.canlii.org";
pub const CANLII_HOME: &str = "https://www.canlii.org/en/";
pub const CANLII_INPUT_WAIT_SECS: u64 = 20;
pub const CANLII_RESULTS_WAIT_SECS: u64 = 40;

// Justia (Google custom search embed)
pub const JUSTIA_SEARCH: &str = "https://www.justia.com/search";
pub const JUSTIA_CX: &str = "012624009653992735869%3Acyxxdwappru";
pub const JUSTIA_PAGE_SIZE: u32 = 10;
pub const JUSTIA_WAIT_SECS: u64 = 20;

// WebDriver
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const WEBDRIVER_POLL_MS: u64 = 500;
pub const WEBDRIVER_COMMAND_TIMEOUT_SECS: u64 = 60;

// Env overrides
pub const ENV_WEBDRIVER_URL: &str = "LEGAL_SEARCH_WEBDRIVER_URL";
pub const ENV_BROWSER: &str = "LEGAL_SEARCH_BROWSER";
pub const ENV_HEADLESS: &str = "LEGAL_SEARCH_HEADLESS";
