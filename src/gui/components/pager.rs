// src/gui/components/pager.rs
//
// ← Previous | Page N | Next →, laid out 1:2:1 across the panel.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Size, StripBuilder};

use crate::{
    gui::{actions, app::App},
    source::Source,
};

const ROW_HEIGHT: f32 = 24.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App, source: Source) {
    let page = app.session.page(source);
    let mut prev = false;
    let mut next = false;

    ui.push_id(source.key(), |ui| {
        ui.allocate_ui(egui::vec2(ui.available_width(), ROW_HEIGHT), |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.25))
                .size(Size::relative(0.5))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        prev = ui.add_enabled(page > 1, egui::Button::new("← Previous")).clicked();
                    });
                    strip.cell(|ui| {
                        ui.centered_and_justified(|ui| {
                            ui.label(format!("Page {page}"));
                        });
                    });
                    strip.cell(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            next = ui.button("Next →").clicked();
                        });
                    });
                });
        });
    });

    if prev {
        actions::prev_page(app, source);
        ui.ctx().request_repaint();
    }
    if next {
        actions::next_page(app, source);
        ui.ctx().request_repaint();
    }
}
