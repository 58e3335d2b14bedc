// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

/// All shown sources as one Markdown document.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if !app.session.results_fetched() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but nothing has been searched yet");
        return;
    }

    let enabled = app.state.options.search.sources;
    let txt = app.session.render_all(&enabled);
    logf!("Copy: sources={} bytes={}", enabled.count(), txt.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
