//! # Per-source search specs
//!
//! One module per search engine. Each spec knows **where the results live** on
//! that engine and how to turn them into [`SearchRecord`](crate::record::SearchRecord)s.
//!
//! ## What lives here
//! - **URL building** for the engine's query conventions (keyword encoding,
//!   page-number or offset parameters).
//! - **Access**: a plain HTTP GET (`core::net`) for static result pages, or a
//!   scripted browser session (`core::webdriver`) where results are rendered
//!   by JavaScript.
//! - **Extraction**: one pass over the parsed document with CSS selectors and
//!   the `core::html` helpers.
//!
//! ## What does **not** live here
//! - **Error degradation**: specs return `Result`; the session decides what a
//!   failed source shows (empty list or placeholder) and surfaces the message.
//! - **Numbering, pagination state, formatting**: see `session`, `pagination`, `format`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → session::SearchSession → fetch::LiveFetcher → specs::<source>::fetch()
//!                                                          ↘ parse(html) → Vec<SearchRecord>
//! ```
//!
//! ## Testing notes
//! `parse` is pure and takes the raw HTML, so every spec is tested offline
//! against small captured fixtures.
pub mod austlii;
pub mod canlii;
pub mod indian_kanoon;
pub mod justia;
