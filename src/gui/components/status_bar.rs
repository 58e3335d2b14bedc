// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let copy = ui.add_enabled(app.session.results_fetched(), egui::Button::new("Copy"))
            .on_hover_text("Copy all shown results as Markdown");
        if copy.clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.separator();
        ui.label(app.status_text());
    });
}
