// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use clap::Parser;
use eframe::egui::ViewportBuilder;
use wikitable_scrape::cli::{self, Args};
use wikitable_scrape::config::state::AppState;
use wikitable_scrape::gui;

fn main() {
    let args = Args::parse();
    wikitable_scrape::log::init(&args.log);

    let state = AppState { options: args.options(), ..AppState::default() };
    let session = match cli::build_session(&args, &state.options) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, session, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
