// src/gui/components/search_bar.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut go = false;

    ui.horizontal(|ui| {
        ui.label("Enter keyword to search:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.options.search.keyword)
                .hint_text("e.g. contract law")
                .desired_width(320.0),
        );
        // Enter in the field behaves like the button
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            go = true;
        }
        if ui.button("Search").clicked() {
            go = true;
        }
    });

    if go {
        actions::search(app);
        ui.ctx().request_repaint();
    }
}
