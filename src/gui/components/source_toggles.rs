// src/gui/components/source_toggles.rs
//
// One checkbox per source. Toggles only affect the next search and which
// result lists are shown; they never fetch on their own.

use eframe::egui;

use crate::{gui::app::App, source::Source};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.label("Sources:");
        for source in Source::ALL {
            let on = app.state.options.search.sources.get_mut(source);
            if ui.checkbox(on, source.label()).changed() {
                logf!("UI: {source} → {}", if *on { "on" } else { "off" });
            }
        }

        ui.separator();

        let show = &mut app.state.gui.show_details;
        if ui.checkbox(show, "Show details").changed() {
            logd!("UI: show_details → {}", *show);
        }
    });
}
