// src/session/command.rs

/// Everything an operator can ask the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Accept,
    Skip,
    NextTable,
    PreviousTable,
    NextSource,
    PreviousSource,
    Show,
}

/// Whether the front end should keep running after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Key bindings, in display order.
pub const KEY_HELP: &[(char, &str)] = &[
    ('q', "quit"),
    ('a', "accept"),
    ('s', "skip"),
    ('n', "next table"),
    ('p', "previous table"),
    ('l', "next source"),
    ('j', "previous source"),
    ('t', "show table"),
];

impl Command {
    pub fn from_key(key: char) -> Option<Self> {
        Some(match key.to_ascii_lowercase() {
            'q' => Command::Quit,
            'a' => Command::Accept,
            's' => Command::Skip,
            'n' => Command::NextTable,
            'p' => Command::PreviousTable,
            'l' => Command::NextSource,
            'j' => Command::PreviousSource,
            't' => Command::Show,
            _ => return None,
        })
    }

    pub fn key(&self) -> char {
        match self {
            Command::Quit => 'q',
            Command::Accept => 'a',
            Command::Skip => 's',
            Command::NextTable => 'n',
            Command::PreviousTable => 'p',
            Command::NextSource => 'l',
            Command::PreviousSource => 'j',
            Command::Show => 't',
        }
    }
}
