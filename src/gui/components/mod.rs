// src/gui/components/mod.rs
pub mod pager;
pub mod results;
pub mod search_bar;
pub mod source_toggles;
pub mod status_bar;
