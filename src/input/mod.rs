use macroquad::prelude::*;

use crate::application::{Command, Direction, Mode};
use crate::ui::Button;

type KeyAction = (KeyCode, Command);

const ARROWS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Key bindings for each mode. Save mode reads typed text instead.
fn key_actions(mode: Mode) -> &'static [KeyAction] {
    match mode {
        Mode::MainMenu => &[
            (KeyCode::Enter, Command::StartEmpty),
            (KeyCode::C, Command::OpenConfigList),
            (KeyCode::Q, Command::Quit),
        ],
        Mode::SelectConfig => &[
            (KeyCode::M, Command::MainMenu),
            (KeyCode::Escape, Command::MainMenu),
            (KeyCode::Q, Command::Quit),
        ],
        Mode::Play => &[
            (KeyCode::P, Command::TogglePause),
            (KeyCode::M, Command::MainMenu),
            (KeyCode::Q, Command::Quit),
        ],
        Mode::Pause => &[
            (KeyCode::P, Command::TogglePause),
            (KeyCode::Space, Command::ToggleCell),
            (KeyCode::R, Command::Randomize),
            (KeyCode::S, Command::OpenSave),
            (KeyCode::M, Command::MainMenu),
            (KeyCode::Q, Command::Quit),
        ],
        Mode::Save => &[
            (KeyCode::Enter, Command::ConfirmSave),
            (KeyCode::KpEnter, Command::ConfirmSave),
            (KeyCode::Backspace, Command::SaveBackspace),
            (KeyCode::Escape, Command::CancelSave),
        ],
    }
}

/// Gather this frame's commands from clicks and key presses
pub fn collect_commands(mode: Mode, buttons: &[Button]) -> Vec<Command> {
    let mouse_pos = mouse_position();
    let mut commands: Vec<Command> = buttons
        .iter()
        .filter_map(|btn| btn.clicked(mouse_pos))
        .collect();

    // Typed characters only matter while naming a save; drop them otherwise
    // so the key that opened the dialog does not land in the name.
    while let Some(ch) = get_char_pressed() {
        if mode == Mode::Save {
            commands.push(Command::SaveInput(ch));
        }
    }

    if matches!(mode, Mode::Play | Mode::Pause) {
        commands.extend(
            ARROWS
                .iter()
                .filter(|(key, _)| is_key_pressed(*key))
                .map(|&(_, direction)| Command::Move(direction)),
        );
    }

    commands.extend(
        key_actions(mode)
            .iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|&(_, command)| command),
    );
    commands
}
