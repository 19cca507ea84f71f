// src/gui/components/help_bar.rs

use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::session::{Command, KEY_HELP};

/// Key strip. Every entry is also a button for mouse users.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for &(key, what) in KEY_HELP {
            let text = RichText::new(format!("{key}  {what}")).monospace();
            if ui.button(text).clicked() {
                clicked = Command::from_key(key);
            }
        }
    });

    if let Some(cmd) = clicked {
        if !app.dispatch(cmd) {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
