// src/gui/components/record_table.rs
//
// Records of the pair on screen, or why there are none.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::data::{Record, to_rows};
use crate::gui::app::App;
use crate::render::NO_DATA;
use crate::session::PairResult;

const COL_WIDTHS: [f32; 7] = [60.0, 60.0, 260.0, 140.0, 240.0, 90.0, 90.0];

// Season, Episode, Spent, Profit
fn is_numeric(ci: usize) -> bool {
    matches!(ci, 0 | 1 | 5 | 6)
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.session.view();
    let records = match view.result {
        PairResult::Loaded(records) if !records.is_empty() => records,
        PairResult::Error(msg) => {
            let red = ui.visuals().error_fg_color;
            ui.label(RichText::new(format!("Error loading table: {msg}")).color(red));
            return;
        }
        _ => {
            ui.label(RichText::new(NO_DATA).weak());
            return;
        }
    };

    let rows = to_rows(records);
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("records", view.source_index, view.table_index));
    for w in COL_WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in Record::HEADERS.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let text = RichText::new(*h).strong();
                    if is_numeric(ci) {
                        ui.centered_and_justified(|ui| { ui.label(text); });
                    } else {
                        ui.label(text);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(cells) = rows.get(row.index()) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        // multi-line titles stay on one row
                        let text = cell.replace('\n', " ");
                        if is_numeric(ci) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                        }
                    });
                }
            });
        });
}
