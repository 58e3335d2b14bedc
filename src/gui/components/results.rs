// src/gui/components/results.rs
//
// Draws each enabled source's list. Numbering comes from `SearchSession::view`,
// the same path the Markdown renderer uses, so paged sources keep counting
// across pages.

use eframe::egui::{self, RichText};

use crate::{
    format::{NO_RESULTS, numbered},
    gui::app::App,
    source::Source,
};

use super::pager;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.session.results_fetched() {
        ui.weak("Enter a keyword and press Search.");
        return;
    }

    // Current toggles decide what is shown.
    let enabled = app.state.options.search.sources;
    if enabled.count() == 0 {
        ui.label("No sources selected.");
        return;
    }

    for source in enabled.iter() {
        draw_source(ui, app, source);
        ui.separator();
    }
}

fn draw_source(ui: &mut egui::Ui, app: &mut App, source: Source) {
    let show_details = app.state.gui.show_details;
    let view = app.session.view(source);

    match view.page {
        Some(p) => ui.heading(format!("{} Results (Page {p})", source.label())),
        None => ui.heading(format!("{} Results", source.label())),
    };

    if let Some(err) = view.error {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    if view.records.is_empty() {
        ui.label(NO_RESULTS);
    }

    for (n, rec) in numbered(view.records, view.start) {
        ui.horizontal_wrapped(|ui| {
            ui.strong(format!("{n}."));
            if rec.is_placeholder() {
                ui.strong(rec.title.as_str());
            } else {
                ui.hyperlink_to(RichText::new(rec.title.as_str()).strong(), &rec.link)
                    .on_hover_text(rec.link.as_str());
            }
        });
        if show_details {
            if let Some(d) = &rec.details {
                ui.label(RichText::new(d.as_str()).weak());
            }
        }
        ui.add_space(4.0);
    }

    if source.is_paged() {
        pager::draw(ui, app, source);
    }
}
