// src/session/mod.rs
//! Review session: which (source, table) pair is on screen, what has been
//! loaded for each pair, and which pairs the operator kept.
//!
//! Front ends turn key presses into [`Command`]s, call [`Session::apply`],
//! then draw whatever [`Session::view`] returns. The session never draws.

mod accepted;
mod command;
mod state;

pub use accepted::AcceptedSet;
pub use command::{Command, Flow, KEY_HELP};
pub use state::{PairResult, PairView, Session, SourceEntry};
