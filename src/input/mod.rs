use macroquad::prelude::{KeyCode, is_key_pressed};

use crate::application::Command;

/// Badge buttons mapped onto the keyboard: A and B reset, MENU quits
pub const BINDINGS: [(KeyCode, Command); 4] = [
    (KeyCode::A, Command::Reset),
    (KeyCode::B, Command::Reset),
    (KeyCode::M, Command::Quit),
    (KeyCode::Escape, Command::Quit),
];

/// Commands triggered this frame, deduplicated, in binding order
pub fn poll_commands() -> Vec<Command> {
    collect_commands(|key| is_key_pressed(key))
}

/// Fold a key-state probe over [`BINDINGS`]
pub fn collect_commands(pressed: impl Fn(KeyCode) -> bool) -> Vec<Command> {
    BINDINGS.iter().fold(Vec::new(), |mut out, &(key, command)| {
        if pressed(key) && !out.contains(&command) {
            out.push(command);
        }
        out
    })
}
