// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::config::state::AppState;
use crate::core::net::SourceFetcher;
use crate::session::{Command, Flow, Session};

use super::{components, keys};

pub fn run(
    options: eframe::NativeOptions,
    session: Session<SourceFetcher>,
    state: AppState,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Wiki Table Review",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(session, state)))),
    )?;
    Ok(())
}

pub struct App {
    pub session: Session<SourceFetcher>,
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
    started: bool,
}

impl App {
    pub fn new(session: Session<SourceFetcher>, state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        logf!("Init: GUI with {} sources", session.source_count());
        Self {
            session,
            state,
            out_path_text,
            out_path_dirty: false,
            status: s!("Ready"),
            started: false,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Run one command against the session. Returns false on quit.
    pub fn dispatch(&mut self, cmd: Command) -> bool {
        let flow = self.session.apply(cmd);
        if let Some(err) = self.session.view().result.error() {
            self.status = format!("{:?}: {err}", cmd);
        } else {
            self.status = format!("{:?}", cmd);
        }
        flow == Flow::Continue
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.session.show();
            self.started = true;
        }

        for cmd in keys::pressed(ctx) {
            if !self.dispatch(cmd) {
                logf!("UI: quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                break;
            }
        }

        egui::TopBottomPanel::top("meta").show(ctx, |ui| {
            components::meta_bar::draw(ui, self);
        });

        if self.state.gui.show_help {
            egui::TopBottomPanel::bottom("help").show(ctx, |ui| {
                components::help_bar::draw(ui, self);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::record_table::draw(ui, self);
        });
    }
}
