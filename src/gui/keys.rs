// src/gui/keys.rs
//
// Typed characters → session commands. Same bindings as the terminal.

use eframe::egui::{self, Event};

use crate::session::Command;

/// Commands typed this frame, in order. Nothing while a text field has focus.
pub fn pressed(ctx: &egui::Context) -> Vec<Command> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|i| commands_from_events(&i.events))
}

fn commands_from_events(events: &[Event]) -> Vec<Command> {
    events
        .iter()
        .filter_map(|ev| match ev {
            Event::Text(text) => Some(text.chars()),
            _ => None,
        })
        .flatten()
        .filter_map(Command::from_key)
        .collect()
}
