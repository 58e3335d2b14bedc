// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,search,next_page,prev_page}.

mod copy;     // src/gui/actions/copy.rs
mod paginate; // src/gui/actions/paginate.rs
mod search;   // src/gui/actions/search.rs

pub use copy::copy;
pub use paginate::{next_page, prev_page};
pub use search::search;
