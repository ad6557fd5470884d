mod button;

pub use button::Button;

use std::path::{Path, PathBuf};

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{App, Command, Mode, Viewport};

pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const MENU_WIDTH: f32 = 320.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width()
}

/// Get the height of the grid area (everything above the status bar)
pub fn grid_area_height() -> f32 {
    (screen_height() - STATUS_BAR_HEIGHT).max(0.0)
}

/// How many screen cells fit in the grid area
pub fn viewport(cell_size: f32) -> Viewport {
    Viewport::new(
        (grid_area_width() / cell_size) as i64,
        (grid_area_height() / cell_size) as i64,
    )
}

/// X position of the centered menu column
pub fn menu_x() -> f32 {
    (screen_width() - MENU_WIDTH) / 2.0
}

fn column(top: f32, entries: Vec<(String, Command)>) -> Vec<Button> {
    let x = menu_x();
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, command))| {
            let y = top + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(x, y, MENU_WIDTH, BUTTON_HEIGHT, label, command)
        })
        .collect()
}

pub fn main_menu_buttons() -> Vec<Button> {
    column(
        screen_height() / 3.0,
        vec![
            ("Start empty".to_owned(), Command::StartEmpty),
            ("Select config".to_owned(), Command::OpenConfigList),
            ("Quit".to_owned(), Command::Quit),
        ],
    )
}

/// One button per pattern file, then a way back
pub fn config_buttons(patterns: &[PathBuf]) -> Vec<Button> {
    let mut entries: Vec<(String, Command)> = patterns
        .iter()
        .enumerate()
        .map(|(i, path)| (file_label(path), Command::LoadPattern(i)))
        .collect();
    entries.push(("Return to main menu".to_owned(), Command::MainMenu));
    column(80.0, entries)
}

pub fn save_buttons() -> Vec<Button> {
    let top = screen_height() / 3.0 + 60.0;
    column(
        top,
        vec![
            ("OK".to_owned(), Command::ConfirmSave),
            ("Cancel".to_owned(), Command::CancelSave),
        ],
    )
}

/// Buttons visible in the app's current mode
pub fn buttons_for(app: &App) -> Vec<Button> {
    match app.mode() {
        Mode::MainMenu => main_menu_buttons(),
        Mode::SelectConfig => config_buttons(app.patterns()),
        Mode::Save => save_buttons(),
        Mode::Play | Mode::Pause => Vec::new(),
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
