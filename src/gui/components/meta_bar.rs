// src/gui/components/meta_bar.rs
//
// Where the cursor is and whether the pair on screen is already kept.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.session.view();

    let tables = match view.table_count {
        Some(n) => format!("Table {} of {}", view.table_index, n),
        None => format!("Table {} of ?", view.table_index),
    };
    let season = view
        .season
        .map(|s| format!("season {s}"))
        .unwrap_or_else(|| s!("no season"));

    ui.horizontal(|ui| {
        ui.label(RichText::new(view.source_id).monospace().strong());
    });

    let mut toggle_help = false;
    ui.horizontal(|ui| {
        ui.label(format!(
            "Source {} of {} ({season})",
            view.source_index + 1,
            view.source_count
        ));
        ui.separator();
        ui.label(tables);
        ui.separator();

        if view.accepted {
            ui.label(RichText::new("Already added").color(Color32::from_rgb(0x4C, 0xAF, 0x50)));
        } else {
            ui.label(RichText::new("Not added").weak());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            toggle_help = ui.small_button("?").on_hover_text("Key bindings").clicked();
            ui.label(RichText::new(&app.status).weak());
        });
    });

    if toggle_help {
        app.state.gui.show_help = !app.state.gui.show_help;
        logd!("UI: show_help → {}", app.state.gui.show_help);
    }
}
