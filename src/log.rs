// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "legal_search=debug";

/// Install the file subscriber (`.store/debug.log`). Safe to call more than once.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = fs::create_dir_all(STORE_DIR);
        let path = Path::new(STORE_DIR).join(LOG_FILE);

        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            // No log file, no logging. The app still runs.
            return;
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
