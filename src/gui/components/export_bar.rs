// src/gui/components/export_bar.rs

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::file;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");

            ui.add_enabled(
                export.format != ExportFormat::Json,
                egui::Checkbox::new(&mut export.include_headers, "Include headers"),
            );
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    let accepted = app.session.accepted();
    let summary = format!("{} tables, {} records kept", accepted.len(), accepted.record_count());

    ui.horizontal(|ui| {
        if ui.button("Copy accepted").clicked() {
            copy(ui, app);
        }
        if ui.button("Export accepted").clicked() {
            export(app);
        }
        ui.label(summary);
    });
}

fn copy(ui: &mut egui::Ui, app: &mut App) {
    if app.session.accepted().is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but nothing has been accepted");
        return;
    }
    match file::render_accepted(&app.state.options.export, app.session.accepted()) {
        Ok(txt) => {
            ui.ctx().copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}

fn export(app: &mut App) {
    if app.session.accepted().is_empty() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but nothing has been accepted");
        return;
    }

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    match file::export_accepted(&app.state.options.export, app.session.accepted()) {
        Ok(path) => {
            app.out_path_text = path.to_string_lossy().into_owned();
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
