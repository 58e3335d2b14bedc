// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod format;
pub mod gui;
pub mod pagination;
pub mod progress;
pub mod record;
pub mod session;
pub mod source;
pub mod specs;
